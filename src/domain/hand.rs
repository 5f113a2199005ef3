use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Рука игрока. Всегда отсортирована по убыванию очков;
/// карты с одинаковыми очками сохраняют порядок поступления.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self::new();
        for card in cards {
            hand.add(card);
        }
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    /// Убрать конкретную карту. `false`, если такой карты в руке нет.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                self.sort();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Первая (то есть самая дорогая) карта, которую можно положить на `board`.
    pub fn first_playable(&self, board: &Card) -> Option<Card> {
        self.cards.iter().copied().find(|c| c.playable_against(board))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    // sort_by стабильна, поэтому равные по очкам карты не переставляются.
    fn sort(&mut self) {
        self.cards.sort_by(|a, b| b.score().cmp(&a.score()));
    }
}
