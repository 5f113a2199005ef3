//! Движок игры: дилер, состояние раунда, подсчёт очков.
//!
//! Высокоуровневый объект: `Dealer`
//! Основные операции:
//!   - `Dealer::play_round` – раздать и разыграть один раунд
//!   - `Dealer::finish` – объявить конец игры и собрать итоговые очки
//!   - `Dealer::run` – вся игра целиком

pub mod config;
pub mod dealer;
pub mod errors;
pub mod history;
pub mod round;
pub mod scoring;
pub mod validation;

pub use config::GameConfig;
pub use dealer::{is_round_eligible, Dealer, GamePhase, GameReport, RoundSummary};
pub use errors::{ConfigError, EngineError};
pub use history::{GameEvent, GameEventKind, GameLog};
pub use round::{RoundOutcome, RoundState, TurnStep};
pub use scoring::{rank_standings, Standing};

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`), в тестах – свои заглушки.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Случайное число из ЗАМКНУТОГО диапазона `[low, high]`.
    /// При `high <= low` возвращает `low`.
    fn pick_in_range(&mut self, low: usize, high: usize) -> usize;
}
