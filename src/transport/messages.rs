use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::player::{PlayerSnapshot, TurnDecision};

/// Сообщения дилер -> игрок. Порядок внутри раунда фиксирован:
/// `RoundAnnouncement`, `DealCard`*, `EndOfHand`, `Turn`*, `RoundOver`, `StateRequest`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DealerMessage {
    /// `proceed = false` – игра окончена, игрок отвечает финальным `Snapshot` и выходит.
    RoundAnnouncement { proceed: bool },
    DealCard(Card),
    /// Раздача закончена; ответ – `HandAck`.
    EndOfHand,
    /// Ход игрока против текущей карты борда; ответ – `Decision`.
    Turn { board: Card },
    /// Раунд окончен. Ответа нет.
    RoundOver,
    /// Запрос состояния для подсчёта; ответ – `Snapshot`.
    StateRequest,
}

impl DealerMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            DealerMessage::RoundAnnouncement { .. } => "RoundAnnouncement",
            DealerMessage::DealCard(_) => "DealCard",
            DealerMessage::EndOfHand => "EndOfHand",
            DealerMessage::Turn { .. } => "Turn",
            DealerMessage::RoundOver => "RoundOver",
            DealerMessage::StateRequest => "StateRequest",
        }
    }
}

/// Ответы игрок -> дилер. Всегда неизменяемые снимки, не живое состояние.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerReply {
    HandAck(PlayerSnapshot),
    Decision(TurnDecision),
    Snapshot(PlayerSnapshot),
}

impl PlayerReply {
    pub fn kind(&self) -> &'static str {
        match self {
            PlayerReply::HandAck(_) => "HandAck",
            PlayerReply::Decision(_) => "Decision",
            PlayerReply::Snapshot(_) => "Snapshot",
        }
    }
}
