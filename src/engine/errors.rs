use crate::domain::PlayerId;
use crate::transport::TransportError;

use thiserror::Error;

/// Ошибки конфигурации игры. Фатальны: игра не начинается.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Нужен хотя бы один игрок")]
    NoPlayers,

    #[error("Игроков {requested}, а имён в пуле только {pool}")]
    TooManyPlayers { requested: usize, pool: usize },

    #[error("Максимальная рука {max_hand} не больше минимальной {min_hand} – раздать нельзя")]
    HandTooSmall { max_hand: usize, min_hand: usize },

    #[error("Некорректные границы руки: min={min}, max={max}")]
    InvalidHandBounds { min: usize, max: usize },

    #[error("Состав ({roster}) не совпадает с числом игроков в конфиге ({players})")]
    RosterMismatch { roster: usize, players: usize },
}

/// Ошибки движка (сторона дилера).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] ConfigError),

    #[error("Некорректная колода: {0}")]
    InvalidDeck(String),

    #[error("Нарушение протокола игроком {player}: {detail}")]
    Protocol { player: PlayerId, detail: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
