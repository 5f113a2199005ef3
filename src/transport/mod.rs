//! Транспорт между дилером и игроками: только точка-точка,
//! адресация по `PlayerId`, без broadcast и общей памяти.
//!
//! Дилер всегда инициатор обмена: шлёт запрос и ждёт ответ
//! от того же игрока, прежде чем перейти к следующему.

pub mod channel;
pub mod messages;

pub use channel::{connect, DealerHub, PlayerLink};
pub use messages::{DealerMessage, PlayerReply};

use thiserror::Error;

use crate::domain::PlayerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Игрок {0} отключился")]
    Disconnected(PlayerId),

    #[error("Дилер отключился")]
    DealerGone,

    #[error("Нет канала для игрока {0}")]
    UnknownPlayer(PlayerId),
}

/// Сторона дилера: адресованная отправка и приём.
#[allow(async_fn_in_trait)]
pub trait DealerTransport {
    /// Ждёт, пока канал игрока освободится.
    async fn send(&mut self, to: PlayerId, message: DealerMessage) -> Result<(), TransportError>;

    /// Ждёт ответ конкретного игрока.
    async fn recv(&mut self, from: PlayerId) -> Result<PlayerReply, TransportError>;

    /// Запрос + ответ одним вызовом.
    async fn request(
        &mut self,
        to: PlayerId,
        message: DealerMessage,
    ) -> Result<PlayerReply, TransportError> {
        self.send(to, message).await?;
        self.recv(to).await
    }
}

/// Сторона игрока: у каждого свой приватный канал к дилеру.
#[allow(async_fn_in_trait)]
pub trait PlayerTransport {
    async fn recv(&mut self) -> Result<DealerMessage, TransportError>;

    async fn send(&mut self, reply: PlayerReply) -> Result<(), TransportError>;
}
