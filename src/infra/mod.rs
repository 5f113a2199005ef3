//! Инфраструктура вокруг движка:
//! - RNG-реализации для движка;
//! - пул имён и состав игры;
//! - настройка логов.

pub mod logging;
pub mod names;
pub mod rng;

pub use logging::init_tracing;
pub use names::{build_roster, NAME_POOL};
pub use rng::*;
