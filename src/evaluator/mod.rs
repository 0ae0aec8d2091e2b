pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::catalog::{Combo, ComboScore, CATALOG, HIGH_CARD_SCORE};
use combinations::Combinations;
use std::collections::HashSet;

/// Which combo a played set of cards counts as, and the score pair it earns.
/// Carries no cards: the caller decides which cards the score is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub combo: Combo,
    pub score: ComboScore,
}

impl Classification {
    pub fn is_high_card(&self) -> bool {
        self.combo == Combo::HighCard
    }
}

/// A combo found in a hand together with the cards forming it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScoredCombo {
    pub combo: Combo,
    pub cards: Vec<Card>,
    pub score: u32,
}

impl ScoredCombo {
    pub fn new(combo: Combo, cards: Vec<Card>, score: u32) -> Self {
        Self { combo, cards, score }
    }

    pub fn name(&self) -> &'static str {
        self.combo.name()
    }

    /// 0-based positions of this combo's cards in `hand`, in combo order.
    /// Cards no longer in the hand are skipped.
    pub fn positions_in(&self, hand: &[Card]) -> Vec<usize> {
        self.cards.iter().filter_map(|card| hand.iter().position(|h| h == card)).collect()
    }

    fn dedup_key(&self) -> (Combo, Vec<Card>) {
        let mut cards = self.cards.clone();
        cards.sort_unstable();
        (self.combo, cards)
    }
}

/// Classify a played set of cards by catalog precedence.
///
/// Each entry is tested against the first `required_count` cards only; the
/// caller controls which cards lead. Nothing matching falls back to High Card.
///
/// ```
/// use balatro_poker::cards::parse_cards;
/// use balatro_poker::catalog::Combo;
/// use balatro_poker::evaluator::classify;
///
/// let royal = parse_cards("Ts Js Qs Ks As").unwrap();
/// assert_eq!(classify(&royal).combo, Combo::RoyalFlush);
/// assert_eq!(classify(&[]).combo, Combo::HighCard);
/// ```
pub fn classify(cards: &[Card]) -> Classification {
    CATALOG
        .iter()
        .filter(|def| def.required_count <= cards.len())
        .find(|def| def.matches(&cards[..def.required_count]))
        .map(|def| Classification { combo: def.combo, score: def.score })
        .unwrap_or(Classification { combo: Combo::HighCard, score: HIGH_CARD_SCORE })
}

/// Every combo obtainable from `hand`, best first.
///
/// Each catalog entry is checked against every subset of exactly its required
/// size, and the single highest card is always offered as High Card. Results
/// with the same combo and the same cards appear once. Ordering is score
/// descending, then combo name ascending.
///
/// ```
/// use balatro_poker::cards::parse_cards;
/// use balatro_poker::catalog::Combo;
/// use balatro_poker::evaluator::analyze;
///
/// let hand = parse_cards("2s 2h 7c 9d 9s Kd Kc Kh").unwrap();
/// let ranked = analyze(&hand);
/// assert_eq!(ranked[0].combo, Combo::FullHouse);
/// assert!(analyze(&[]).is_empty());
/// ```
pub fn analyze(hand: &[Card]) -> Vec<ScoredCombo> {
    if hand.is_empty() {
        return Vec::new();
    }

    let mut found: Vec<ScoredCombo> = Vec::new();
    for def in CATALOG.iter() {
        for indices in Combinations::new(hand.len(), def.required_count) {
            let subset: Vec<Card> = indices.iter().map(|&i| hand[i]).collect();
            if def.matches(&subset) {
                let score = def.score.apply(&subset);
                found.push(ScoredCombo::new(def.combo, subset, score));
            }
        }
    }
    if let Some(high) = high_card(hand) {
        found.push(ScoredCombo::new(Combo::HighCard, vec![high], HIGH_CARD_SCORE.apply(&[high])));
    }

    let mut seen = HashSet::new();
    found.retain(|c| seen.insert(c.dedup_key()));

    found.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name().cmp(b.name())));
    log::debug!("analyzed {} cards: {} distinct combos", hand.len(), found.len());
    found
}

/// Best-scoring combo in `hand`, if the hand has any cards.
pub fn recommend(hand: &[Card]) -> Option<ScoredCombo> {
    analyze(hand).into_iter().next()
}

/// First card of maximal rank, in hand order.
fn high_card(hand: &[Card]) -> Option<Card> {
    hand.iter().copied().fold(None, |best: Option<Card>, card| match best {
        Some(b) if b.rank() >= card.rank() => Some(b),
        _ => Some(card),
    })
}
