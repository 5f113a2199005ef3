use std::collections::BTreeMap;

use tokio::sync::mpsc;

use crate::domain::PlayerId;
use crate::transport::{
    DealerMessage, DealerTransport, PlayerReply, PlayerTransport, TransportError,
};

/// Ёмкость канала 1: следующий `send` ждёт, пока игрок не заберёт предыдущее.
const CHANNEL_CAPACITY: usize = 1;

struct DealerSide {
    tx: mpsc::Sender<DealerMessage>,
    rx: mpsc::Receiver<PlayerReply>,
}

/// Все каналы дилера, по одному на игрока.
pub struct DealerHub {
    links: BTreeMap<PlayerId, DealerSide>,
}

/// Приватный конец канала у конкретного игрока.
#[derive(Debug)]
pub struct PlayerLink {
    id: PlayerId,
    rx: mpsc::Receiver<DealerMessage>,
    tx: mpsc::Sender<PlayerReply>,
}

impl PlayerLink {
    pub fn id(&self) -> PlayerId {
        self.id
    }
}

/// Создать пары каналов для всех игроков.
/// `PlayerLink` возвращаются в порядке переданных id.
pub fn connect(ids: impl IntoIterator<Item = PlayerId>) -> (DealerHub, Vec<PlayerLink>) {
    let mut links = BTreeMap::new();
    let mut players = Vec::new();

    for id in ids {
        let (to_player, from_dealer) = mpsc::channel(CHANNEL_CAPACITY);
        let (to_dealer, from_player) = mpsc::channel(CHANNEL_CAPACITY);
        links.insert(
            id,
            DealerSide {
                tx: to_player,
                rx: from_player,
            },
        );
        players.push(PlayerLink {
            id,
            rx: from_dealer,
            tx: to_dealer,
        });
    }

    (DealerHub { links }, players)
}

impl DealerHub {
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.links.keys().copied()
    }

    fn side(&mut self, id: PlayerId) -> Result<&mut DealerSide, TransportError> {
        self.links
            .get_mut(&id)
            .ok_or(TransportError::UnknownPlayer(id))
    }
}

impl DealerTransport for DealerHub {
    async fn send(&mut self, to: PlayerId, message: DealerMessage) -> Result<(), TransportError> {
        let side = self.side(to)?;
        side.tx
            .send(message)
            .await
            .map_err(|_| TransportError::Disconnected(to))
    }

    async fn recv(&mut self, from: PlayerId) -> Result<PlayerReply, TransportError> {
        let side = self.side(from)?;
        side.rx
            .recv()
            .await
            .ok_or(TransportError::Disconnected(from))
    }
}

impl PlayerTransport for PlayerLink {
    async fn recv(&mut self) -> Result<DealerMessage, TransportError> {
        self.rx.recv().await.ok_or(TransportError::DealerGone)
    }

    async fn send(&mut self, reply: PlayerReply) -> Result<(), TransportError> {
        self.tx
            .send(reply)
            .await
            .map_err(|_| TransportError::DealerGone)
    }
}
