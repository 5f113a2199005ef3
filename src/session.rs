//! Сборка игры целиком: каналы, задачи игроков, дилер.
//!
//! Каждый игрок – отдельная tokio-задача со своим `PlayerLink`;
//! дилер работает в вызывающей задаче.

use tokio::task::JoinHandle;
use tracing::debug;

use crate::agent::{AgentError, PlayerAgent};
use crate::domain::deck::Deck;
use crate::domain::player::PlayerSnapshot;
use crate::engine::errors::EngineError;
use crate::engine::{Dealer, GameConfig, GameReport, RandomSource};
use crate::infra::names::build_roster;
use crate::transport::{connect, TransportError};

/// Сыграть игру с колодой, перемешанной через `rng`.
/// Воспроизводимость задаётся самим источником (`DeterministicRng`, `GameRng`).
pub async fn play_game<R: RandomSource>(config: GameConfig, rng: R) -> Result<GameReport, EngineError> {
    run_session(config, None, rng).await
}

/// Сыграть игру с заранее сложенной колодой.
pub async fn play_game_with_deck<R: RandomSource>(
    config: GameConfig,
    deck: Deck,
    rng: R,
) -> Result<GameReport, EngineError> {
    run_session(config, Some(deck), rng).await
}

async fn run_session<R: RandomSource>(
    config: GameConfig,
    deck: Option<Deck>,
    rng: R,
) -> Result<GameReport, EngineError> {
    config.validate()?;
    let roster = build_roster(config.players)?;
    let (hub, links) = connect(roster.iter().map(|p| p.id));

    let dealer = match deck {
        Some(deck) => Dealer::with_deck(config, roster.clone(), deck, rng, hub)?,
        None => Dealer::new(config, roster.clone(), rng, hub)?,
    };

    let handles: Vec<JoinHandle<Result<PlayerSnapshot, AgentError>>> = roster
        .into_iter()
        .zip(links)
        .map(|(identity, link)| tokio::spawn(PlayerAgent::new(identity).run(link)))
        .collect();

    // Дилер дропает свои концы каналов при выходе из run,
    // так что задачи игроков завершатся и при ошибке.
    let outcome = dealer.run().await;

    let mut failure = None;
    for handle in handles {
        let result = match handle.await {
            Ok(result) => player_failure(result),
            Err(_) => Some(EngineError::Internal("player task panicked")),
        };
        if let Some(err) = result {
            failure.get_or_insert(err);
        }
    }

    settle(outcome, failure)
}

/// Во что превращается итог задачи игрока. `None` – ошибки нет
/// (или это обрыв канала со стороны дилера, у которого своя ошибка).
pub fn player_failure(result: Result<PlayerSnapshot, AgentError>) -> Option<EngineError> {
    match result {
        Ok(snapshot) => {
            debug!(player = %snapshot.identity.name, score = snapshot.score, "player task joined");
            None
        }
        Err(AgentError::Protocol(err)) => Some(EngineError::Protocol {
            player: err.player,
            detail: err.to_string(),
        }),
        Err(AgentError::Transport(TransportError::DealerGone)) => None,
        Err(AgentError::Transport(err)) => Some(EngineError::Transport(err)),
    }
}

/// Итог сессии из итога дилера и первой ошибки игроков.
///
/// Если игрок упал, дилер видит только закрытый канал; тогда важнее
/// ошибка самого игрока.
pub fn settle(
    outcome: Result<GameReport, EngineError>,
    failure: Option<EngineError>,
) -> Result<GameReport, EngineError> {
    match (outcome, failure) {
        (Err(EngineError::Transport(TransportError::Disconnected(_))), Some(err)) => Err(err),
        (Err(err), _) => Err(err),
        (Ok(_), Some(err)) => Err(err),
        (Ok(report), None) => Ok(report),
    }
}
