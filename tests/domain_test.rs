//! Интеграционные тесты для доменной модели (crate::domain).

use match_game::domain::*;
use match_game::engine::EngineError;

fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

/// Очки = ранг: Two=2 .. Ace=14.
#[test]
fn card_scores_follow_rank() {
    assert_eq!(Card::new(Rank::Two, Suit::Hearts).score(), 2);
    assert_eq!(Card::new(Rank::Ten, Suit::Clubs).score(), 10);
    assert_eq!(Card::new(Rank::Jack, Suit::Spades).score(), 11);
    assert_eq!(Card::new(Rank::Ace, Suit::Diamonds).score(), 14);
}

/// Масть или ранг – больше ничего.
#[test]
fn card_playable_against_suit_or_rank() {
    let board = c("7d");

    assert!(c("7h").playable_against(&board), "same rank");
    assert!(c("Kd").playable_against(&board), "same suit");
    assert!(!c("As").playable_against(&board));
    assert!(!c("8c").playable_against(&board));
}

/// Card/Suit/Rank: Display + FromStr roundtrip.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("A".parse::<Card>().is_err());
    assert!("Ahh".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
}

#[test]
fn card_long_name() {
    assert_eq!(c("7h").long_name(), "Seven of Hearts");
    assert_eq!(c("Qs").long_name(), "Queen of Spades");
}

/// Стандартный порядок: Hearts 2..A, Diamonds, Spades, Clubs.
#[test]
fn deck_standard_order() {
    let deck = Deck::standard_52();
    let cards = deck.cards();

    assert_eq!(cards.len(), 52);
    assert_eq!(cards[0], c("2h"));
    assert_eq!(cards[12], c("Ah"));
    assert_eq!(cards[13], c("2d"));
    assert_eq!(cards[26], c("2s"));
    assert_eq!(cards[51], c("Ac"));
}

/// Курсор только растёт, после 52 карт – None.
#[test]
fn deck_draw_until_exhausted() {
    let mut deck = Deck::standard_52();

    assert_eq!(deck.draw(), Some(c("2h")));
    assert_eq!(deck.remaining(), 51);

    for _ in 0..51 {
        assert!(deck.draw().is_some());
    }
    assert!(deck.is_exhausted());
    assert_eq!(deck.draw(), None);
    assert_eq!(deck.draw(), None);
    assert_eq!(deck.cursor(), 52);
}

#[test]
fn deck_from_order_validates_permutation() {
    let mut reversed = Deck::standard_52().cards().to_vec();
    reversed.reverse();
    let mut deck = Deck::from_order(reversed).expect("reversed deck is a permutation");
    assert_eq!(deck.draw(), Some(c("Ac")));

    let short = Deck::standard_52().cards()[..51].to_vec();
    assert!(matches!(Deck::from_order(short), Err(EngineError::InvalidDeck(_))));

    let mut dup = Deck::standard_52().cards().to_vec();
    dup[1] = dup[0];
    assert!(matches!(Deck::from_order(dup), Err(EngineError::InvalidDeck(_))));
}

#[test]
fn deck_display_is_numbered_listing() {
    let listing = Deck::standard_52().to_string();
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 52);
    assert_eq!(lines[0], " 1. Two of Hearts");
    assert_eq!(lines[51], "52. Ace of Clubs");
}

fn assert_sorted(hand: &Hand) {
    for pair in hand.cards().windows(2) {
        assert!(
            pair[0].score() >= pair[1].score(),
            "hand not sorted: {:?}",
            hand.cards()
        );
    }
}

/// После любой мутации рука отсортирована по убыванию очков.
#[test]
fn hand_stays_sorted_after_every_mutation() {
    let mut hand = Hand::new();
    for card in ["3h", "Kd", "7s", "Ac", "2d", "Ts"] {
        hand.add(c(card));
        assert_sorted(&hand);
    }

    assert!(hand.remove(&c("7s")));
    assert_sorted(&hand);
    assert!(!hand.remove(&c("7s")), "already removed");

    assert_eq!(
        hand.cards(),
        &[c("Ac"), c("Kd"), c("Ts"), c("3h"), c("2d")]
    );

    hand.clear();
    assert!(hand.is_empty());
}

/// Равные по очкам карты сохраняют порядок поступления.
#[test]
fn hand_ties_keep_arrival_order() {
    let hand = Hand::from_cards([c("Kh"), c("2d"), c("Ks")]);
    assert_eq!(hand.cards(), &[c("Kh"), c("Ks"), c("2d")]);
}

fn player_with(cards: &[&str]) -> PlayerState {
    let mut p = PlayerState::new(PlayerIdentity::new(0, "Alice"));
    for card in cards {
        p.receive_card(c(card));
    }
    p
}

/// hand=[A♠, 7♥], board=7♦ → играем 7♥.
#[test]
fn decide_plays_matching_rank() {
    let mut p = player_with(&["As", "7h"]);

    let d = p.decide(c("7d"));

    assert_eq!(d.action, TurnAction::Played);
    assert_eq!(d.board_card, c("7h"));
    assert_eq!(d.points, 7);
    assert_eq!(d.hand_size_after, 1);
    assert!(!d.hand_empty);
    assert_eq!(p.score, 7);
    assert_eq!(p.hand.cards(), &[c("As")]);
}

/// Из нескольких подходящих играется самая дорогая.
#[test]
fn decide_plays_highest_eligible() {
    let mut p = player_with(&["Kh", "Ks", "9d", "2d"]);

    let d = p.decide(c("Td"));

    assert_eq!(d.board_card, c("9d"));
    assert_eq!(d.points, 9);
    assert_eq!(p.hand.cards(), &[c("Kh"), c("Ks"), c("2d")]);

    // при равных очках – первая в руке
    let d = p.decide(c("Kc"));
    assert_eq!(d.board_card, c("Kh"));
}

#[test]
fn decide_passes_without_match() {
    let mut p = player_with(&["As", "2c"]);

    let d = p.decide(c("7d"));

    assert_eq!(d.action, TurnAction::Passed);
    assert_eq!(d.board_card, c("7d"));
    assert_eq!(d.points, 0);
    assert_eq!(d.hand_size_after, 2);
    assert!(!d.hand_empty);
    assert_eq!(p.score, 0);
}

#[test]
fn decide_last_card_empties_hand() {
    let mut p = player_with(&["9c"]);

    let d = p.decide(c("9h"));

    assert!(d.hand_empty);
    assert_eq!(d.hand_size_after, 0);
    assert_eq!(p.snapshot().score, 9);
    assert_eq!(p.snapshot().hand_size, 0);
}

/// Новый раунд сбрасывает руку, но не счёт.
#[test]
fn reset_hand_keeps_score() {
    let mut p = player_with(&["9c", "3h"]);
    p.decide(c("9h"));
    p.reset_hand();

    assert!(p.hand.is_empty());
    assert_eq!(p.score, 9);
}
