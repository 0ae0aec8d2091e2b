use crate::cards::{Card, Suit};

/// The suit shared by every card, if there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// An empty set is not a flush.
    pub fn detect(cards: &[Card]) -> Self {
        let flush_suit = cards
            .first()
            .map(|c| c.suit())
            .filter(|&suit| cards.iter().all(|c| c.suit() == suit));
        SuitInfo { flush_suit }
    }
}
