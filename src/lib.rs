//! Карточная игра "масть или ранг": один дилер и N игроков,
//! которые общаются только сообщениями точка-точка.
//!
//! - `domain` – карты, колода, рука, игрок;
//! - `engine` – дилер и машина состояний раунда/игры;
//! - `agent` – роль игрока поверх транспорта;
//! - `transport` – типизированные каналы между ролями;
//! - `session` – запуск всей игры (дилер + задачи игроков).

pub mod agent;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod session;
pub mod transport;

pub use agent::{AgentError, AgentPhase, PlayerAgent, ProtocolError};
pub use engine::{Dealer, EngineError, GameConfig, GameReport, RandomSource};
pub use session::{play_game, play_game_with_deck};
