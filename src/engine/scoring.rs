use serde::{Deserialize, Serialize};

use crate::domain::player::{PlayerIdentity, PlayerSnapshot};

/// Строка итоговой таблицы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    /// Место (1-based). При равенстве очков место общее: 1, 1, 3.
    pub place: usize,
    pub identity: PlayerIdentity,
    pub score: u32,
}

/// Отсортировать снимки по убыванию очков.
/// Сортировка стабильная: при равенстве сохраняется порядок хода.
pub fn rank_standings(mut snapshots: Vec<PlayerSnapshot>) -> Vec<Standing> {
    snapshots.sort_by(|a, b| b.score.cmp(&a.score));

    let mut standings: Vec<Standing> = Vec::with_capacity(snapshots.len());
    for (idx, snap) in snapshots.into_iter().enumerate() {
        let place = match standings.last() {
            Some(prev) if prev.score == snap.score => prev.place,
            _ => idx + 1,
        };
        standings.push(Standing {
            place,
            identity: snap.identity,
            score: snap.score,
        });
    }
    standings
}

/// Таблица очков для консоли.
pub fn format_standings(standings: &[Standing]) -> String {
    let mut out = String::from("Place | Player     | Score\n------+------------+------");
    for s in standings {
        out.push_str(&format!(
            "\n{:>5} | {:<10} | {:>5}",
            s.place, s.identity.name, s.score
        ));
    }
    out
}
