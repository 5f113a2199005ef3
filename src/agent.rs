//! Роль игрока: держит свою руку и счёт, отвечает на запросы дилера.
//!
//! Вся мутация руки происходит только здесь; наружу уходят снимки.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::player::{PlayerIdentity, PlayerSnapshot, PlayerState};
use crate::domain::PlayerId;
use crate::transport::{DealerMessage, PlayerReply, PlayerTransport, TransportError};

/// Где игрок находится в протоколе раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AgentPhase {
    /// Ждёт объявления раунда.
    AwaitingRound,
    /// Получает карты.
    Receiving,
    /// Отвечает на ходы.
    Playing,
    /// Раунд окончен, ждёт запроса состояния.
    RoundOver,
    Finished,
}

/// Сообщение пришло не в своё время.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Игрок {player}: неожиданное сообщение {message} в фазе {phase:?}")]
pub struct ProtocolError {
    pub player: PlayerId,
    pub phase: AgentPhase,
    pub message: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Clone, Debug)]
pub struct PlayerAgent {
    state: PlayerState,
    phase: AgentPhase,
}

impl PlayerAgent {
    pub fn new(identity: PlayerIdentity) -> Self {
        Self {
            state: PlayerState::new(identity),
            phase: AgentPhase::AwaitingRound,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.state.identity.id
    }

    pub fn phase(&self) -> AgentPhase {
        self.phase
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.state.snapshot()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == AgentPhase::Finished
    }

    /// Обработать одно сообщение дилера. `Some` – ответ, который надо отправить.
    pub fn handle(&mut self, message: DealerMessage) -> Result<Option<PlayerReply>, ProtocolError> {
        match (self.phase, message) {
            (AgentPhase::AwaitingRound, DealerMessage::RoundAnnouncement { proceed: true }) => {
                self.state.reset_hand();
                self.phase = AgentPhase::Receiving;
                Ok(None)
            }
            (AgentPhase::AwaitingRound, DealerMessage::RoundAnnouncement { proceed: false }) => {
                self.phase = AgentPhase::Finished;
                Ok(Some(PlayerReply::Snapshot(self.snapshot())))
            }
            (AgentPhase::Receiving, DealerMessage::DealCard(card)) => {
                self.state.receive_card(card);
                Ok(None)
            }
            (AgentPhase::Receiving, DealerMessage::EndOfHand) => {
                debug!(
                    player = %self.state.identity.name,
                    hand = ?self.state.hand.cards(),
                    "hand received"
                );
                self.phase = AgentPhase::Playing;
                Ok(Some(PlayerReply::HandAck(self.snapshot())))
            }
            (AgentPhase::Playing, DealerMessage::Turn { board }) => {
                let decision = self.state.decide(board);
                Ok(Some(PlayerReply::Decision(decision)))
            }
            (AgentPhase::Playing, DealerMessage::RoundOver) => {
                self.phase = AgentPhase::RoundOver;
                Ok(None)
            }
            (AgentPhase::RoundOver, DealerMessage::StateRequest) => {
                self.phase = AgentPhase::AwaitingRound;
                Ok(Some(PlayerReply::Snapshot(self.snapshot())))
            }
            (phase, other) => Err(ProtocolError {
                player: self.id(),
                phase,
                message: other.kind(),
            }),
        }
    }

    /// Цикл игрока: читать сообщения, пока дилер не объявит конец игры.
    /// Возвращает финальный снимок.
    pub async fn run<T: PlayerTransport>(mut self, mut link: T) -> Result<PlayerSnapshot, AgentError> {
        while !self.is_finished() {
            let message = link.recv().await?;
            if let Some(reply) = self.handle(message)? {
                link.send(reply).await?;
            }
        }
        debug!(player = %self.state.identity.name, score = self.state.score, "player done");
        Ok(self.snapshot())
    }
}
