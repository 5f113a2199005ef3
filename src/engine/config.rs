use serde::{Deserialize, Serialize};

use crate::domain::deck::DECK_SIZE;
use crate::engine::errors::ConfigError;
use crate::infra::names::NAME_POOL;

pub const DEFAULT_PLAYERS: usize = 3;
pub const MIN_HAND_SIZE: usize = 4;
pub const MAX_HAND_SIZE: usize = 8;

/// Конфиг игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub players: usize,
    /// Нижняя граница размера руки (раунд идёт, только если можно дать больше).
    pub min_hand_size: usize,
    /// Верхний предел размера руки, даже если колода позволяет больше.
    pub max_hand_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            min_hand_size: MIN_HAND_SIZE,
            max_hand_size: MAX_HAND_SIZE,
        }
    }
}

impl GameConfig {
    pub fn with_players(players: usize) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    /// Проверка до начала игры: хватает ли имён и можно ли раздать
    /// хотя бы одну легальную руку из полной колоды.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.players > NAME_POOL.len() {
            return Err(ConfigError::TooManyPlayers {
                requested: self.players,
                pool: NAME_POOL.len(),
            });
        }
        if self.min_hand_size >= self.max_hand_size {
            return Err(ConfigError::InvalidHandBounds {
                min: self.min_hand_size,
                max: self.max_hand_size,
            });
        }

        // Одна карта всегда уходит на борд.
        let max_hand = (DECK_SIZE - 1) / self.players;
        if max_hand <= self.min_hand_size {
            return Err(ConfigError::HandTooSmall {
                max_hand,
                min_hand: self.min_hand_size,
            });
        }
        Ok(())
    }
}
