use balatro_poker::cards::{parse_cards, Card};
use balatro_poker::catalog::{Combo, CATALOG};
use balatro_poker::deck::Deck;
use balatro_poker::evaluator::{analyze, classify};
use balatro_poker::round::{Round, RoundConfig, RoundError};
use balatro_poker::scoring::score;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

/// A round whose opening hand is exactly `hand`, in order.
fn round_with_hand(hand: &str, config: RoundConfig) -> Round {
    let wanted = cards(hand);
    let mut order: Vec<Card> =
        Deck::standard().as_slice().iter().copied().filter(|c| !wanted.contains(c)).collect();
    order.extend(wanted.iter().rev());
    Round::with_deck(config, Deck::try_from_cards(order).unwrap())
}

#[test]
fn scenario_three_kings_from_mixed_hand() {
    let mut round = round_with_hand("2s 2h 7c 9d 9s Kd Kc Kh", RoundConfig::default());
    assert_eq!(round.hand(), cards("2s 2h 7c 9d 9s Kd Kc Kh").as_slice());
    let played = round.play(&[5, 6, 7]).unwrap();
    assert_eq!(played.combo, Combo::ThreeOfAKind);
    assert_eq!(played.combo.name(), "Three of a Kind");
    assert_eq!(played.score, 180);
    assert_eq!(played.cards, cards("Kd Kc Kh"));
    assert_eq!(&round.hand()[..5], cards("2s 2h 7c 9d 9s").as_slice());
}

#[test]
fn scenario_royal_flush_score() {
    let royal = cards("Ts Js Qs Ks As");
    let class = classify(&royal);
    assert_eq!(class.combo.name(), "Royal Flush");
    assert_eq!(class.score.apply(&royal), 1208);
    assert_eq!(score(100, 8, &royal), 1208);
}

#[test]
fn scenario_three_fours_are_not_quads() {
    let fours = cards("4h 4d 4s 9c");
    let quads = CATALOG.iter().find(|d| d.combo == Combo::FourOfAKind).unwrap();
    assert!(!quads.matches(&fours));
    assert_eq!(classify(&fours).combo, Combo::ThreeOfAKind);
}

#[test]
fn scenario_empty_hand_has_nothing_to_analyze() {
    assert!(analyze(&[]).is_empty());
}

#[test]
fn scenario_sixth_discard_is_refused() {
    let mut round = Round::new(RoundConfig { seed: Some(21), ..RoundConfig::default() });
    for _ in 0..5 {
        round.discard(&[0]).unwrap();
    }
    assert_eq!(round.discards_remaining(), Some(0));
    let hand = round.hand().to_vec();
    let deck_len = round.deck().len();
    assert_eq!(round.discard(&[0]), Err(RoundError::DiscardLimitReached { limit: 5 }));
    assert_eq!(round.hand(), hand.as_slice());
    assert_eq!(round.deck().len(), deck_len);
    assert_eq!(round.discarded().len(), 5);
}

#[test]
fn recommendation_points_at_hand_positions() {
    let round = round_with_hand("Kd 2s Kc 7c Kh 9d 2h 9s", RoundConfig::default());
    let (best, positions) = round.recommendation().unwrap();
    assert_eq!(best.combo, Combo::FullHouse);
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 2, 4, 5, 7]);
}
