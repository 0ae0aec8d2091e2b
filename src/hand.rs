use crate::cards::{parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::str::FromStr;

/// Default number of cards a hand is refilled to.
pub const HAND_SIZE: usize = 8;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// A player's hand: an ordered sequence of distinct cards.
///
/// ```
/// use balatro_poker::hand::Hand;
///
/// let hand: Hand = "As Kd 7c".parse().unwrap();
/// assert_eq!(hand.len(), 3);
/// assert_eq!(hand.as_slice()[1].to_string(), "Kd");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

/// Hand positions picked out of a raw index list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Valid positions, first occurrence order, no repeats.
    pub positions: Vec<usize>,
    /// Indices that pointed past the end of the hand or repeated an earlier one.
    pub dropped: Vec<usize>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Hand {
    /// Reject repeated cards.
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Keep the in-range indices, first occurrence only, in the order given.
    pub fn select(&self, indices: &[usize]) -> Selection {
        let mut seen = HashSet::new();
        let mut selection = Selection::default();
        for &i in indices {
            if i < self.cards.len() && seen.insert(i) {
                selection.positions.push(i);
            } else {
                selection.dropped.push(i);
            }
        }
        selection
    }

    /// Remove the selected cards and return them in selection order.
    ///
    /// Cards are filtered out by position set rather than removed one by one,
    /// so the remaining cards keep their relative order.
    pub(crate) fn take(&mut self, selection: &Selection) -> Vec<Card> {
        let taken: Vec<Card> = selection.positions.iter().map(|&i| self.cards[i]).collect();
        let chosen: HashSet<usize> = selection.positions.iter().copied().collect();
        let mut index = 0;
        self.cards.retain(|_| {
            let keep = !chosen.contains(&index);
            index += 1;
            keep
        });
        taken
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::try_new(parse_cards(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn select_drops_out_of_range_and_repeats() {
        let h = hand("2s 2h 7c 9d");
        let sel = h.select(&[3, 9, 0, 3, 1]);
        assert_eq!(sel.positions, vec![3, 0, 1]);
        assert_eq!(sel.dropped, vec![9, 3]);
        assert!(h.select(&[4, 5]).is_empty());
        assert!(h.select(&[]).is_empty());
    }

    #[test]
    fn take_returns_selection_order_and_keeps_rest() {
        let mut h = hand("2s 2h 7c 9d 9s");
        let sel = h.select(&[4, 0, 2]);
        let taken = h.take(&sel);
        assert_eq!(taken, parse_cards("9s 2s 7c").unwrap());
        assert_eq!(h.as_slice(), parse_cards("2h 9d").unwrap().as_slice());
    }

    #[test]
    fn repeated_cards_are_rejected() {
        assert_eq!("As As As As".parse::<Hand>(), Err(HandError::DuplicateCards));
        assert_eq!("Kd 7c Kd".parse::<Hand>(), Err(HandError::DuplicateCards));
        assert!(matches!("As Zz".parse::<Hand>(), Err(HandError::CardParse(_))));
        assert_eq!(Hand::try_new(Vec::new()), Ok(Hand::default()));
        assert_eq!(hand("As Ah Ad Ac").len(), 4);
    }

    #[test]
    fn get_and_push() {
        let mut h = Hand::default();
        assert!(h.is_empty());
        h.push(Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(h.get(0), Some(Card::new(Rank::Ace, Suit::Clubs)));
        assert_eq!(h.get(1), None);
    }
}
