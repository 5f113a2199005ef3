//! Доменная модель игры: карты, колода, рука, игроки.

pub mod card;
pub mod deck;
pub mod hand;
pub mod player;

/// Идентификатор игрока = его позиция в порядке хода.
pub type PlayerId = u64;
pub type RoundNumber = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
