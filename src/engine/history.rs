use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::player::{TurnAction, TurnDecision};
use crate::domain::{PlayerId, RoundNumber};
use crate::engine::round::RoundOutcome;

/// Тип события в игре.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Раунд объявлен, выбран размер руки.
    RoundStarted {
        round: RoundNumber,
        hand_size: usize,
    },

    /// Игрок получил карту при раздаче.
    CardDealt {
        player: PlayerId,
        card: Card,
    },

    /// Первая карта раунда на борде.
    BoardSeeded {
        card: Card,
    },

    /// Ход игрока.
    PlayerActed {
        player: PlayerId,
        decision: TurnDecision,
    },

    /// Полный круг пасов – добрали карту из колоды.
    BoardReplenished {
        card: Card,
    },

    RoundEnded {
        round: RoundNumber,
        outcome: RoundOutcome,
    },

    /// Новых раундов не будет.
    GameOver {
        rounds_played: RoundNumber,
        cards_left: usize,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история игры.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameLog {
    pub events: Vec<GameEvent>,
}

impl GameLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    /// Последовательность карт, побывавших на борде, по раундам.
    pub fn board_sequences(&self) -> Vec<Vec<Card>> {
        let mut rounds: Vec<Vec<Card>> = Vec::new();
        for event in &self.events {
            match &event.kind {
                GameEventKind::RoundStarted { .. } => rounds.push(Vec::new()),
                GameEventKind::BoardSeeded { card } | GameEventKind::BoardReplenished { card } => {
                    if let Some(current) = rounds.last_mut() {
                        current.push(*card);
                    }
                }
                GameEventKind::PlayerActed { decision, .. }
                    if decision.action == TurnAction::Played =>
                {
                    if let Some(current) = rounds.last_mut() {
                        current.push(decision.board_card);
                    }
                }
                _ => {}
            }
        }
        rounds
    }

    /// Карты, розданные игроку в раунде с номером `round` (1-based).
    pub fn dealt_to(&self, round: RoundNumber, player: PlayerId) -> Vec<Card> {
        let mut current = 0;
        let mut cards = Vec::new();
        for event in &self.events {
            match &event.kind {
                GameEventKind::RoundStarted { round: r, .. } => current = *r,
                GameEventKind::CardDealt { player: p, card } if current == round && *p == player => {
                    cards.push(*card)
                }
                _ => {}
            }
        }
        cards
    }
}
