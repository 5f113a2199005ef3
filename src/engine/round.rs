use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::player::{TurnAction, TurnDecision};
use crate::domain::PlayerId;

/// Чем закончился раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Игрок опустошил руку.
    Won(PlayerId),
    /// Полный круг пасов, а добрать на борд нечего.
    Exhausted,
}

/// Что делать дилеру после очередного хода.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStep {
    Continue,
    /// Все спасовали подряд – нужна новая карта на борд.
    Replenish,
    Finished(RoundOutcome),
}

/// Состояние раунда. Живёт только у дилера.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundState {
    /// Стопка на борде; верхняя карта – текущая карта борда.
    pile: Vec<Card>,
    consecutive_passes: usize,
    turns: u32,
    outcome: Option<RoundOutcome>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Первая карта на борд. В руки она не попадает.
    pub fn seed(&mut self, card: Card) {
        self.pile.push(card);
    }

    pub fn board(&self) -> Option<Card> {
        self.pile.last().copied()
    }

    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Учесть ход игрока.
    ///
    /// Пустая рука проверяется раньше счётчика пасов: победа важнее добора.
    pub fn record_turn(
        &mut self,
        player: PlayerId,
        decision: &TurnDecision,
        num_players: usize,
    ) -> TurnStep {
        self.turns += 1;

        match decision.action {
            TurnAction::Played => {
                self.pile.push(decision.board_card);
                self.consecutive_passes = 0;
            }
            TurnAction::Passed => self.consecutive_passes += 1,
        }

        if decision.hand_empty {
            let outcome = RoundOutcome::Won(player);
            self.outcome = Some(outcome);
            return TurnStep::Finished(outcome);
        }

        if self.consecutive_passes >= num_players {
            TurnStep::Replenish
        } else {
            TurnStep::Continue
        }
    }

    /// Положить добранную карту на борд. `None` из колоды = исчерпание,
    /// раунд заканчивается без победителя.
    pub fn replenish(&mut self, card: Option<Card>) -> Option<RoundOutcome> {
        match card {
            Some(card) => {
                self.pile.push(card);
                self.consecutive_passes = 0;
                None
            }
            None => {
                self.outcome = Some(RoundOutcome::Exhausted);
                self.outcome
            }
        }
    }
}
