use match_game::domain::{
    card::Card,
    player::{PlayerIdentity, PlayerSnapshot, TurnAction, TurnDecision},
};
use match_game::engine::{
    config::GameConfig,
    dealer::is_round_eligible,
    errors::ConfigError,
    history::{GameEventKind, GameLog},
    round::{RoundOutcome, RoundState, TurnStep},
    scoring::{format_standings, rank_standings},
    validation::validate_decision,
};
use match_game::infra::build_roster;

fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

fn played(card: &str, left: usize) -> TurnDecision {
    let card = c(card);
    TurnDecision {
        board_card: card,
        action: TurnAction::Played,
        points: card.score(),
        hand_size_after: left,
        hand_empty: left == 0,
    }
}

fn passed(board: &str, left: usize) -> TurnDecision {
    TurnDecision {
        board_card: c(board),
        action: TurnAction::Passed,
        points: 0,
        hand_size_after: left,
        hand_empty: false,
    }
}

//
// eligibility
//
#[test]
fn eligibility_boundary_three_players_thirteen_cards() {
    // floor(12 / 3) = 4, не больше 4 → раунда нет
    assert!(!is_round_eligible(13, 3, 4));
    // floor(15 / 3) = 5 > 4
    assert!(is_round_eligible(16, 3, 4));
}

#[test]
fn eligibility_edge_values() {
    assert!(!is_round_eligible(0, 2, 4));
    assert!(!is_round_eligible(10, 0, 4));
    assert!(is_round_eligible(52, 10, 4));
    assert!(!is_round_eligible(52, 11, 4));
}

//
// round.rs
//
#[test]
fn round_state_seed_sets_board() {
    let mut round = RoundState::new();
    assert_eq!(round.board(), None);

    round.seed(c("Th"));
    assert_eq!(round.board(), Some(c("Th")));
    assert_eq!(round.pile(), &[c("Th")]);
    assert!(!round.is_over());
}

#[test]
fn round_state_play_resets_pass_counter() {
    let mut round = RoundState::new();
    round.seed(c("Th"));

    assert_eq!(round.record_turn(0, &passed("Th", 4), 3), TurnStep::Continue);
    assert_eq!(round.consecutive_passes(), 1);

    assert_eq!(round.record_turn(1, &played("8h", 3), 3), TurnStep::Continue);
    assert_eq!(round.consecutive_passes(), 0);
    assert_eq!(round.board(), Some(c("8h")));
    assert_eq!(round.turns(), 2);
}

#[test]
fn round_state_full_pass_cycle_requests_replenish() {
    let mut round = RoundState::new();
    round.seed(c("2c"));

    assert_eq!(round.record_turn(0, &passed("2c", 5), 2), TurnStep::Continue);
    assert_eq!(round.record_turn(1, &passed("2c", 5), 2), TurnStep::Replenish);

    assert_eq!(round.replenish(Some(c("9d"))), None);
    assert_eq!(round.board(), Some(c("9d")));
    assert_eq!(round.consecutive_passes(), 0);
}

/// n=2, никто не может сыграть, колода пуста → Exhausted без ошибки.
#[test]
fn round_state_pass_streak_with_empty_deck_is_exhaustion() {
    let mut round = RoundState::new();
    round.seed(c("2c"));

    round.record_turn(0, &passed("2c", 4), 2);
    let step = round.record_turn(1, &passed("2c", 4), 2);
    assert_eq!(step, TurnStep::Replenish);

    assert_eq!(round.replenish(None), Some(RoundOutcome::Exhausted));
    assert_eq!(round.outcome(), Some(RoundOutcome::Exhausted));
    assert!(round.is_over());
}

/// Пустая рука на ходу, который заодно закрыл бы круг пасов → победа.
#[test]
fn round_state_win_takes_precedence_over_pass_cycle() {
    let mut round = RoundState::new();
    round.seed(c("5s"));

    // Игрок 0 пасует, игрок 1 пасует, игрок 2 играет последнюю карту.
    round.record_turn(0, &passed("5s", 2), 3);
    round.record_turn(1, &passed("5s", 2), 3);

    // Решение с аномалией: пас + пустая рука. Пасов становится 3 == n,
    // но победа проверяется первой.
    let odd = TurnDecision {
        board_card: c("5s"),
        action: TurnAction::Passed,
        points: 0,
        hand_size_after: 0,
        hand_empty: true,
    };
    assert_eq!(
        round.record_turn(2, &odd, 3),
        TurnStep::Finished(RoundOutcome::Won(2))
    );

    let mut round = RoundState::new();
    round.seed(c("5s"));
    assert_eq!(
        round.record_turn(1, &played("5d", 0), 3),
        TurnStep::Finished(RoundOutcome::Won(1))
    );
    assert_eq!(round.outcome(), Some(RoundOutcome::Won(1)));
}

//
// validation.rs
//
#[test]
fn validation_accepts_honest_decisions() {
    let board = c("7d");
    let pile = [c("7d")];
    let held = [c("As"), c("7h")];

    assert!(validate_decision(&board, &pile, &held, &played("7h", 1)).is_ok());
    assert!(validate_decision(&board, &pile, &held, &passed("7d", 2)).is_ok());
    assert!(validate_decision(&board, &pile, &[c("Kd")], &played("Kd", 0)).is_ok());
}

#[test]
fn validation_rejects_broken_decisions() {
    let board = c("7d");
    let pile = [c("3d"), c("7d")];
    let held = [c("As"), c("7h")];

    // не подходит к борду
    assert!(validate_decision(&board, &pile, &held, &played("As", 1)).is_err());
    // уже лежит в стопке
    assert!(validate_decision(&board, &pile, &held, &played("3d", 1)).is_err());
    // неверные очки
    let mut wrong_points = played("7h", 1);
    wrong_points.points = 99;
    assert!(validate_decision(&board, &pile, &held, &wrong_points).is_err());
    // размер руки не уменьшился
    assert!(validate_decision(&board, &pile, &held, &played("7h", 2)).is_err());
    // пас, но борд сменился
    assert!(validate_decision(&board, &pile, &held, &passed("8d", 2)).is_err());
    // пас с очками
    let mut pass_points = passed("7d", 2);
    pass_points.points = 3;
    assert!(validate_decision(&board, &pile, &held, &pass_points).is_err());
    // hand_empty врёт
    let mut liar = played("7h", 1);
    liar.hand_empty = true;
    assert!(validate_decision(&board, &pile, &held, &liar).is_err());
}

/// Подходящая карта, которой нет на руке (ещё в колоде или у соседа).
#[test]
fn validation_rejects_card_not_held() {
    let board = c("7d");
    let pile = [c("7d")];
    let held = [c("As"), c("7h")];

    let err = validate_decision(&board, &pile, &held, &played("Kd", 1))
        .expect_err("Kd was never dealt to this player");
    assert!(err.contains("not in their hand"), "err: {err}");
}

//
// scoring.rs
//
fn snap(id: u64, name: &str, score: u32) -> PlayerSnapshot {
    PlayerSnapshot {
        identity: PlayerIdentity::new(id, name),
        score,
        hand_size: 0,
    }
}

#[test]
fn standings_sorted_descending_with_shared_places() {
    let standings = rank_standings(vec![
        snap(0, "Alice", 20),
        snap(1, "Bob", 35),
        snap(2, "Carol", 20),
        snap(3, "Dave", 5),
    ]);

    let names: Vec<&str> = standings.iter().map(|s| s.identity.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice", "Carol", "Dave"]);

    let places: Vec<usize> = standings.iter().map(|s| s.place).collect();
    assert_eq!(places, vec![1, 2, 2, 4]);
}

#[test]
fn standings_table_lists_every_player() {
    let standings = rank_standings(vec![snap(0, "Alice", 7), snap(1, "Bob", 9)]);
    let table = format_standings(&standings);

    assert_eq!(table.lines().count(), 4);
    assert!(table.lines().nth(2).unwrap_or_default().contains("Bob"));
    assert!(table.contains("Alice"));
}

//
// config.rs + names
//
#[test]
fn config_validation_errors() {
    assert_eq!(GameConfig::with_players(0).validate(), Err(ConfigError::NoPlayers));
    assert_eq!(
        GameConfig::with_players(11).validate(),
        Err(ConfigError::TooManyPlayers {
            requested: 11,
            pool: 10
        })
    );

    let big_min = GameConfig {
        players: 8,
        min_hand_size: 6,
        ..GameConfig::default()
    };
    assert_eq!(
        big_min.validate(),
        Err(ConfigError::HandTooSmall {
            max_hand: 6,
            min_hand: 6
        })
    );

    let inverted = GameConfig {
        min_hand_size: 8,
        max_hand_size: 8,
        ..GameConfig::default()
    };
    assert_eq!(
        inverted.validate(),
        Err(ConfigError::InvalidHandBounds { min: 8, max: 8 })
    );

    assert!(GameConfig::default().validate().is_ok());
    assert!(GameConfig::with_players(10).validate().is_ok());
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: GameConfig = serde_json::from_str(r#"{"players": 4}"#).expect("config json");

    assert_eq!(cfg.players, 4);
    assert_eq!(cfg.min_hand_size, 4);
    assert_eq!(cfg.max_hand_size, 8);
}

/// Seed задаётся только источником случайности, а не конфигом:
/// лишнее поле не должно молча игнорироваться.
#[test]
fn config_rejects_unknown_fields() {
    let parsed = serde_json::from_str::<GameConfig>(r#"{"players": 4, "seed": 9}"#);
    assert!(parsed.is_err());
}

#[test]
fn roster_names_follow_pool_order() {
    let roster = build_roster(3).expect("three players fit the pool");

    assert_eq!(roster[0], PlayerIdentity::new(0, "Alice"));
    assert_eq!(roster[1], PlayerIdentity::new(1, "Bob"));
    assert_eq!(roster[2], PlayerIdentity::new(2, "Carol"));

    assert!(build_roster(0).is_err());
    assert!(build_roster(11).is_err());
}

//
// history.rs
//
#[test]
fn game_log_board_sequences_and_deals() {
    let mut log = GameLog::new();
    log.push(GameEventKind::RoundStarted { round: 1, hand_size: 4 });
    log.push(GameEventKind::CardDealt { player: 0, card: c("2h") });
    log.push(GameEventKind::CardDealt { player: 1, card: c("3h") });
    log.push(GameEventKind::BoardSeeded { card: c("Th") });
    log.push(GameEventKind::PlayerActed { player: 0, decision: passed("Th", 1) });
    log.push(GameEventKind::PlayerActed { player: 1, decision: played("3h", 0) });
    log.push(GameEventKind::RoundEnded { round: 1, outcome: RoundOutcome::Won(1) });
    log.push(GameEventKind::RoundStarted { round: 2, hand_size: 4 });
    log.push(GameEventKind::BoardSeeded { card: c("4c") });
    log.push(GameEventKind::BoardReplenished { card: c("5c") });

    assert_eq!(log.events[3].index, 3);
    assert_eq!(
        log.board_sequences(),
        vec![vec![c("Th"), c("3h")], vec![c("4c"), c("5c")]]
    );
    assert_eq!(log.dealt_to(1, 0), vec![c("2h")]);
    assert!(log.dealt_to(2, 0).is_empty());
}
