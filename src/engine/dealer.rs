use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::player::{PlayerIdentity, PlayerSnapshot, TurnAction};
use crate::domain::{PlayerId, RoundNumber};
use crate::engine::config::GameConfig;
use crate::engine::errors::{ConfigError, EngineError};
use crate::engine::history::{GameEventKind, GameLog};
use crate::engine::round::{RoundOutcome, RoundState, TurnStep};
use crate::engine::scoring::{rank_standings, Standing};
use crate::engine::validation::validate_decision;
use crate::engine::RandomSource;
use crate::transport::{DealerMessage, DealerTransport, PlayerReply};

/// Фаза игры у дилера.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingRound,
    Dealing,
    PlayingRound,
    Scoring,
    GameOver,
}

/// Итог одного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: RoundNumber,
    pub hand_size: usize,
    pub seed_card: Card,
    pub outcome: RoundOutcome,
    pub turns: u32,
    pub standings: Vec<Standing>,
}

/// Итог всей игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameReport {
    pub rounds: Vec<RoundSummary>,
    pub final_standings: Vec<Standing>,
    pub cards_left: usize,
    pub log: GameLog,
}

/// Можно ли начать раунд: каждому игроку должно достаться больше
/// `min_hand_size` карт, и ещё одна карта остаётся на борд.
pub fn is_round_eligible(remaining: usize, num_players: usize, min_hand_size: usize) -> bool {
    if remaining == 0 || num_players == 0 {
        return false;
    }
    (remaining - 1) / num_players > min_hand_size
}

/// Дилер: владеет колодой, составом и машиной состояний игры.
/// С игроками общается только через транспорт.
pub struct Dealer<R, T> {
    config: GameConfig,
    roster: Vec<PlayerIdentity>,
    deck: Deck,
    rng: R,
    transport: T,
    phase: GamePhase,
    round: RoundNumber,
    /// Розданные и ещё не сыгранные карты каждого игрока (по индексу в roster).
    dealt: Vec<Hand>,
    rounds: Vec<RoundSummary>,
    log: GameLog,
}

impl<R: RandomSource, T: DealerTransport> Dealer<R, T> {
    /// Новая игра со стандартной колодой, перемешанной через `rng`.
    pub fn new(
        config: GameConfig,
        roster: Vec<PlayerIdentity>,
        mut rng: R,
        transport: T,
    ) -> Result<Self, EngineError> {
        let mut deck = Deck::standard_52();
        deck.shuffle(&mut rng);
        Self::with_deck(config, roster, deck, rng, transport)
    }

    /// Игра с заранее сложенной колодой (без перемешивания).
    pub fn with_deck(
        config: GameConfig,
        roster: Vec<PlayerIdentity>,
        deck: Deck,
        rng: R,
        transport: T,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if roster.len() != config.players {
            return Err(ConfigError::RosterMismatch {
                roster: roster.len(),
                players: config.players,
            }
            .into());
        }

        debug!("deck order:\n{deck}");
        let dealt = vec![Hand::new(); roster.len()];
        Ok(Self {
            config,
            roster,
            deck,
            rng,
            transport,
            phase: GamePhase::AwaitingRound,
            round: 0,
            dealt,
            rounds: Vec::new(),
            log: GameLog::new(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn round(&self) -> RoundNumber {
        self.round
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn roster(&self) -> &[PlayerIdentity] {
        &self.roster
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    fn num_players(&self) -> usize {
        self.roster.len()
    }

    pub fn round_eligible(&self) -> bool {
        is_round_eligible(
            self.deck.remaining(),
            self.num_players(),
            self.config.min_hand_size,
        )
    }

    /// Верхняя граница размера руки для следующего раунда.
    pub fn max_hand_size(&self) -> usize {
        let fair_share = self.deck.remaining().saturating_sub(1) / self.num_players();
        fair_share.min(self.config.max_hand_size)
    }

    fn protocol(player: PlayerId, detail: impl Into<String>) -> EngineError {
        EngineError::Protocol {
            player,
            detail: detail.into(),
        }
    }

    /// Раздать и разыграть один раунд.
    /// `None` – раунд раздать нельзя (или игра уже окончена).
    pub async fn play_round(&mut self) -> Result<Option<RoundSummary>, EngineError> {
        if self.phase == GamePhase::GameOver {
            return Ok(None);
        }
        self.phase = GamePhase::AwaitingRound;
        if !self.round_eligible() {
            debug!(remaining = self.deck.remaining(), "no round can be dealt");
            return Ok(None);
        }
        self.round += 1;
        let round = self.round;

        for player in 0..self.num_players() {
            let id = self.roster[player].id;
            self.transport
                .send(id, DealerMessage::RoundAnnouncement { proceed: true })
                .await?;
        }

        let hand_size = self.deal().await?;

        self.phase = GamePhase::PlayingRound;
        let mut state = RoundState::new();
        let seed_card = self
            .deck
            .draw()
            .ok_or(EngineError::Internal("deck exhausted before seeding the board"))?;
        state.seed(seed_card);
        self.log.push(GameEventKind::BoardSeeded { card: seed_card });
        info!("Board card: {}", seed_card.long_name());

        let outcome = self.play_turns(&mut state).await?;

        for player in &self.roster {
            self.transport.send(player.id, DealerMessage::RoundOver).await?;
        }
        self.log.push(GameEventKind::RoundEnded { round, outcome });
        match outcome {
            RoundOutcome::Won(id) => {
                info!("=== Round {round} over: {} emptied their hand ===", self.name_of(id))
            }
            RoundOutcome::Exhausted => {
                info!("=== Round {round} over: nobody can play and the deck is empty ===")
            }
        }

        self.phase = GamePhase::Scoring;
        let mut snapshots = Vec::with_capacity(self.num_players());
        for player in 0..self.num_players() {
            let id = self.roster[player].id;
            let reply = self.transport.request(id, DealerMessage::StateRequest).await?;
            snapshots.push(self.expect_snapshot(player, reply)?);
        }

        let summary = RoundSummary {
            round,
            hand_size,
            seed_card,
            outcome,
            turns: state.turns(),
            standings: rank_standings(snapshots),
        };
        self.rounds.push(summary.clone());
        self.phase = GamePhase::AwaitingRound;
        Ok(Some(summary))
    }

    /// Раздача: размер руки из `[min_hand_size, max_hand_size()]` включительно,
    /// по одной карте каждому игроку по кругу.
    async fn deal(&mut self) -> Result<usize, EngineError> {
        self.phase = GamePhase::Dealing;
        let round = self.round;
        let max_hand_size = self.max_hand_size();
        let hand_size = self
            .rng
            .pick_in_range(self.config.min_hand_size, max_hand_size);
        self.log.push(GameEventKind::RoundStarted { round, hand_size });
        info!(
            "=== Round {round}: dealing {hand_size} cards to each of {} players ===",
            self.num_players()
        );

        for hand in &mut self.dealt {
            hand.clear();
        }
        for _ in 0..hand_size {
            for player in 0..self.num_players() {
                let id = self.roster[player].id;
                let card = self
                    .deck
                    .draw()
                    .ok_or(EngineError::Internal("deck exhausted while dealing"))?;
                self.transport.send(id, DealerMessage::DealCard(card)).await?;
                self.dealt[player].add(card);
                self.log.push(GameEventKind::CardDealt { player: id, card });
            }
        }

        for player in 0..self.num_players() {
            let id = self.roster[player].id;
            let reply = self.transport.request(id, DealerMessage::EndOfHand).await?;
            let snapshot = match reply {
                PlayerReply::HandAck(snapshot) => snapshot,
                other => {
                    return Err(Self::protocol(
                        id,
                        format!("expected HandAck, got {}", other.kind()),
                    ))
                }
            };
            self.check_identity(player, &snapshot)?;
            if snapshot.hand_size != self.dealt[player].len() {
                return Err(Self::protocol(
                    id,
                    format!("holds {} cards, dealt {hand_size}", snapshot.hand_size),
                ));
            }
        }
        debug!(remaining = self.deck.remaining(), "dealing done");

        Ok(hand_size)
    }

    /// Ходы по кругу в фиксированном порядке, пока раунд не закончится.
    async fn play_turns(&mut self, state: &mut RoundState) -> Result<RoundOutcome, EngineError> {
        let num_players = self.num_players();

        for player in (0..num_players).cycle() {
            let id = self.roster[player].id;
            let board = state
                .board()
                .ok_or(EngineError::Internal("board is empty during play"))?;

            let reply = self
                .transport
                .request(id, DealerMessage::Turn { board })
                .await?;
            let decision = match reply {
                PlayerReply::Decision(decision) => decision,
                other => {
                    return Err(Self::protocol(
                        id,
                        format!("expected Decision, got {}", other.kind()),
                    ))
                }
            };
            validate_decision(&board, state.pile(), self.dealt[player].cards(), &decision)
                .map_err(|detail| Self::protocol(id, detail))?;
            if decision.action == TurnAction::Played {
                self.dealt[player].remove(&decision.board_card);
            }

            info!(
                "{} {} {} for {} points, has {} left",
                self.roster[player].name,
                decision.action.verb(),
                decision.board_card.long_name(),
                decision.points,
                decision.hand_size_after
            );
            self.log.push(GameEventKind::PlayerActed {
                player: id,
                decision,
            });

            match state.record_turn(id, &decision, num_players) {
                TurnStep::Continue => {}
                TurnStep::Finished(outcome) => return Ok(outcome),
                TurnStep::Replenish => {
                    let card = self.deck.draw();
                    if let Some(outcome) = state.replenish(card) {
                        return Ok(outcome);
                    }
                    if let Some(card) = card {
                        self.log.push(GameEventKind::BoardReplenished { card });
                        info!("Nobody could play, new board card: {}", card.long_name());
                    }
                }
            }
        }

        // (0..n).cycle() с n > 0 бесконечен.
        Err(EngineError::Internal("turn cycle ended"))
    }

    /// Конец игры: объявить всем `proceed = false`, собрать финальные снимки.
    pub async fn finish(&mut self) -> Result<Vec<Standing>, EngineError> {
        self.phase = GamePhase::GameOver;
        info!(
            "=== Game over after {} rounds, {} cards left in the deck ===",
            self.round,
            self.deck.remaining()
        );

        let mut snapshots = Vec::with_capacity(self.num_players());
        for player in 0..self.num_players() {
            let id = self.roster[player].id;
            let reply = self
                .transport
                .request(id, DealerMessage::RoundAnnouncement { proceed: false })
                .await?;
            snapshots.push(self.expect_snapshot(player, reply)?);
        }

        self.log.push(GameEventKind::GameOver {
            rounds_played: self.round,
            cards_left: self.deck.remaining(),
        });
        Ok(rank_standings(snapshots))
    }

    /// Вся игра: раунды, пока их можно раздать, затем финальный подсчёт.
    pub async fn run(mut self) -> Result<GameReport, EngineError> {
        while self.play_round().await?.is_some() {}
        let final_standings = self.finish().await?;

        Ok(GameReport {
            rounds: self.rounds,
            final_standings,
            cards_left: self.deck.remaining(),
            log: self.log,
        })
    }

    fn expect_snapshot(
        &self,
        player: usize,
        reply: PlayerReply,
    ) -> Result<PlayerSnapshot, EngineError> {
        let id = self.roster[player].id;
        match reply {
            PlayerReply::Snapshot(snapshot) => {
                self.check_identity(player, &snapshot)?;
                Ok(snapshot)
            }
            other => Err(Self::protocol(
                id,
                format!("expected Snapshot, got {}", other.kind()),
            )),
        }
    }

    fn check_identity(&self, player: usize, snapshot: &PlayerSnapshot) -> Result<(), EngineError> {
        let expected = &self.roster[player];
        if snapshot.identity != *expected {
            return Err(Self::protocol(
                expected.id,
                format!("answered as {:?}", snapshot.identity),
            ));
        }
        Ok(())
    }

    fn name_of(&self, id: PlayerId) -> &str {
        self.roster
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or("?")
    }
}
