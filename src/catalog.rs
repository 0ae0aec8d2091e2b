//! The fixed table of scoring combinations, highest precedence first.

use crate::cards::Card;
use crate::evaluator::detector;
use crate::scoring;
use std::fmt;

/// Named poker combination recognised by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Combo {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    Pair,
    HighCard,
}

impl Combo {
    pub const fn name(self) -> &'static str {
        match self {
            Combo::RoyalFlush => "Royal Flush",
            Combo::StraightFlush => "Straight Flush",
            Combo::FourOfAKind => "Four of a Kind",
            Combo::FullHouse => "Full House",
            Combo::Flush => "Flush",
            Combo::Straight => "Straight",
            Combo::ThreeOfAKind => "Three of a Kind",
            Combo::TwoPair => "Two Pair",
            Combo::Pair => "Pair",
            Combo::HighCard => "High Card",
        }
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base chips and multiplier attached to a combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboScore {
    pub base: u32,
    pub multiplier: u32,
}

impl ComboScore {
    pub const fn new(base: u32, multiplier: u32) -> Self {
        Self { base, multiplier }
    }

    /// Apply this score pair to a set of cards.
    pub fn apply(self, cards: &[Card]) -> u32 {
        scoring::score(self.base, self.multiplier, cards)
    }
}

/// One catalog entry. The predicate only ever sees exactly `required_count` cards
/// when called by the classifier or the analyzer.
#[derive(Clone, Copy)]
pub struct ComboDefinition {
    pub combo: Combo,
    pub required_count: usize,
    pub predicate: fn(&[Card]) -> bool,
    pub score: ComboScore,
}

impl ComboDefinition {
    pub fn name(&self) -> &'static str {
        self.combo.name()
    }

    pub fn matches(&self, cards: &[Card]) -> bool {
        (self.predicate)(cards)
    }
}

impl fmt::Debug for ComboDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboDefinition")
            .field("combo", &self.combo)
            .field("required_count", &self.required_count)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

/// Score used when nothing in [`CATALOG`] matches.
pub const HIGH_CARD_SCORE: ComboScore = ComboScore::new(5, 1);

pub static CATALOG: [ComboDefinition; 9] = [
    ComboDefinition {
        combo: Combo::RoyalFlush,
        required_count: 5,
        predicate: detector::is_royal_flush,
        score: ComboScore::new(100, 8),
    },
    ComboDefinition {
        combo: Combo::StraightFlush,
        required_count: 5,
        predicate: detector::is_straight_flush,
        score: ComboScore::new(100, 8),
    },
    ComboDefinition {
        combo: Combo::FourOfAKind,
        required_count: 4,
        predicate: detector::is_four_of_a_kind,
        score: ComboScore::new(60, 7),
    },
    ComboDefinition {
        combo: Combo::FullHouse,
        required_count: 5,
        predicate: detector::is_full_house,
        score: ComboScore::new(40, 4),
    },
    ComboDefinition {
        combo: Combo::Flush,
        required_count: 5,
        predicate: detector::is_flush,
        score: ComboScore::new(35, 4),
    },
    ComboDefinition {
        combo: Combo::Straight,
        required_count: 5,
        predicate: detector::is_straight,
        score: ComboScore::new(30, 4),
    },
    ComboDefinition {
        combo: Combo::ThreeOfAKind,
        required_count: 3,
        predicate: detector::is_three_of_a_kind,
        score: ComboScore::new(30, 3),
    },
    ComboDefinition {
        combo: Combo::TwoPair,
        required_count: 4,
        predicate: detector::is_two_pair,
        score: ComboScore::new(20, 2),
    },
    ComboDefinition {
        combo: Combo::Pair,
        required_count: 2,
        predicate: detector::is_pair,
        score: ComboScore::new(10, 2),
    },
];

/// The catalog in precedence order.
pub fn combo_catalog() -> &'static [ComboDefinition] {
    &CATALOG
}

/// Reference rows for a score table: every catalog entry followed by High Card.
///
/// ```
/// use balatro_poker::catalog::{score_reference, Combo};
///
/// let rows = score_reference();
/// assert_eq!(rows.len(), 10);
/// assert_eq!(rows[0].0, Combo::RoyalFlush);
/// assert_eq!(rows[9].0, Combo::HighCard);
/// ```
pub fn score_reference() -> Vec<(Combo, ComboScore)> {
    CATALOG
        .iter()
        .map(|def| (def.combo, def.score))
        .chain(std::iter::once((Combo::HighCard, HIGH_CARD_SCORE)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_and_scores() {
        let expected = [
            (Combo::RoyalFlush, 5, 100, 8),
            (Combo::StraightFlush, 5, 100, 8),
            (Combo::FourOfAKind, 4, 60, 7),
            (Combo::FullHouse, 5, 40, 4),
            (Combo::Flush, 5, 35, 4),
            (Combo::Straight, 5, 30, 4),
            (Combo::ThreeOfAKind, 3, 30, 3),
            (Combo::TwoPair, 4, 20, 2),
            (Combo::Pair, 2, 10, 2),
        ];
        assert_eq!(CATALOG.len(), expected.len());
        for (def, (combo, count, base, mult)) in CATALOG.iter().zip(expected) {
            assert_eq!(def.combo, combo);
            assert_eq!(def.required_count, count);
            assert_eq!(def.score, ComboScore::new(base, mult));
        }
    }

    #[test]
    fn high_card_is_not_in_catalog() {
        assert!(CATALOG.iter().all(|d| d.combo != Combo::HighCard));
        assert_eq!(HIGH_CARD_SCORE, ComboScore::new(5, 1));
    }

    #[test]
    fn names_display() {
        assert_eq!(Combo::FourOfAKind.to_string(), "Four of a Kind");
        assert_eq!(CATALOG[7].name(), "Two Pair");
    }
}
