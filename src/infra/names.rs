use crate::domain::player::PlayerIdentity;
use crate::domain::PlayerId;
use crate::engine::errors::ConfigError;

/// Фиксированный пул имён; имя игрока = NAME_POOL[позиция].
pub const NAME_POOL: [&str; 10] = [
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy",
];

/// Состав игры: id = позиция в порядке хода, имя из пула по той же позиции.
pub fn build_roster(players: usize) -> Result<Vec<PlayerIdentity>, ConfigError> {
    if players == 0 {
        return Err(ConfigError::NoPlayers);
    }
    if players > NAME_POOL.len() {
        return Err(ConfigError::TooManyPlayers {
            requested: players,
            pool: NAME_POOL.len(),
        });
    }

    Ok(NAME_POOL
        .iter()
        .take(players)
        .enumerate()
        .map(|(idx, name)| PlayerIdentity::new(idx as PlayerId, *name))
        .collect())
}
