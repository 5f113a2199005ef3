use core::fmt;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

pub const DECK_SIZE: usize = 52;

/// Колода карт: упорядоченные 52 карты + курсор выдачи.
///
/// Курсор только растёт; когда он доходит до конца, `draw` возвращает `None`.
/// Это штатный сигнал исчерпания, а не ошибка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Diamonds 2..A, Spades 2..A, Clubs 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards, cursor: 0 }
    }

    /// Заранее сложенная колода (для тестов и реплея).
    /// Порядок должен быть перестановкой стандартных 52 карт.
    pub fn from_order(cards: Vec<Card>) -> Result<Self, EngineError> {
        if cards.len() != DECK_SIZE {
            return Err(EngineError::InvalidDeck(format!(
                "expected {DECK_SIZE} cards, got {}",
                cards.len()
            )));
        }
        let distinct: HashSet<Card> = cards.iter().copied().collect();
        if distinct.len() != DECK_SIZE {
            return Err(EngineError::InvalidDeck("duplicate cards".into()));
        }
        Ok(Deck { cards, cursor: 0 })
    }

    /// Полное перемешивание всех 52 карт; курсор сбрасывается в начало.
    /// Уже выданные карты остаются валидными значениями у владельцев.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
        self.cursor = 0;
    }

    /// Взять одну карту сверху колоды.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    /// Сколько карт ещё можно выдать.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Сколько карт уже выдано.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Полный порядок колоды (включая уже выданные карты).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Display for Deck {
    /// Нумерованный список: ` 1. Two of Hearts`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:2}. {}", i + 1, card.long_name())?;
        }
        Ok(())
    }
}
