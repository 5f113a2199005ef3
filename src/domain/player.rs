use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Hand;
use crate::domain::PlayerId;

/// Идентичность игрока: не меняется всю игру.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PlayerIdentity {
    /// Позиция в порядке хода (0-based).
    pub id: PlayerId,
    pub name: String,
}

impl PlayerIdentity {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Что игрок сделал на своём ходу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnAction {
    Played,
    Passed,
}

impl TurnAction {
    pub fn verb(&self) -> &'static str {
        match self {
            TurnAction::Played => "played",
            TurnAction::Passed => "passed",
        }
    }
}

/// Результат одного хода, который игрок отправляет дилеру.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnDecision {
    /// Карта на борде после хода (сыгранная или прежняя при пасе).
    pub board_card: Card,
    pub action: TurnAction,
    pub points: u32,
    pub hand_size_after: usize,
    /// Рука опустела: сигнал победы в раунде.
    pub hand_empty: bool,
}

/// Неизменяемый снимок состояния игрока для дилера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub identity: PlayerIdentity,
    pub score: u32,
    pub hand_size: usize,
}

/// Состояние игрока: рука + накопленный счёт.
/// Рука живёт один раунд, счёт живёт всю игру и только растёт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    pub identity: PlayerIdentity,
    pub hand: Hand,
    pub score: u32,
}

impl PlayerState {
    pub fn new(identity: PlayerIdentity) -> Self {
        Self {
            identity,
            hand: Hand::new(),
            score: 0,
        }
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    /// Новый раунд: рука с прошлого раунда полностью сбрасывается.
    pub fn reset_hand(&mut self) {
        self.hand.clear();
    }

    /// Жадный ход: играем первую подходящую карту в отсортированной руке,
    /// т.е. самую дорогую из допустимых. Иначе пас.
    pub fn decide(&mut self, board: Card) -> TurnDecision {
        match self.hand.first_playable(&board) {
            Some(card) => {
                self.hand.remove(&card);
                let points = card.score();
                self.score += points;
                TurnDecision {
                    board_card: card,
                    action: TurnAction::Played,
                    points,
                    hand_size_after: self.hand.len(),
                    hand_empty: self.hand.is_empty(),
                }
            }
            None => TurnDecision {
                board_card: board,
                action: TurnAction::Passed,
                points: 0,
                hand_size_after: self.hand.len(),
                hand_empty: self.hand.is_empty(),
            },
        }
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            identity: self.identity.clone(),
            score: self.score,
            hand_size: self.hand.len(),
        }
    }
}
