use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("a deck holds 52 cards, got {0}")]
    WrongSize(usize),
    #[error("duplicate cards in deck")]
    DuplicateCards,
}

/// The 52 cards a round is dealt from. Drawing pops from the tail.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Suit by suit, Two through Ace.
    ///
    /// ```
    /// use balatro_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.as_slice()[0].to_string(), "2c");
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled by a ChaCha8 stream seeded with `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        deck
    }

    /// A full deck in a chosen order; the last card is drawn first.
    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != 52 {
            return Err(DeckError::WrongSize(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(DeckError::DuplicateCards);
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

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// At most `n` cards; fewer once the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_once() {
        let unique: HashSet<Card> = Deck::standard().as_slice().iter().copied().collect();
        assert_eq!(unique.len(), 52);
        let shuffled: HashSet<Card> = Deck::shuffled(3).as_slice().iter().copied().collect();
        assert_eq!(shuffled, unique);
    }

    #[test]
    fn seed_fixes_the_order() {
        assert_eq!(Deck::shuffled(42).as_slice(), Deck::shuffled(42).as_slice());
        assert_ne!(Deck::shuffled(42).as_slice(), Deck::shuffled(43).as_slice());
    }

    #[test]
    fn draws_come_from_the_tail() {
        let mut deck = Deck::try_from_cards(Deck::standard().as_slice().to_vec()).unwrap();
        assert_eq!(deck.draw().map(|c| c.to_string()), Some("As".to_string()));
        assert_eq!(deck.draw_n(60).len(), 51);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn prepared_decks_must_be_complete() {
        let mut cards = Deck::standard().as_slice().to_vec();
        cards.pop();
        assert_eq!(Deck::try_from_cards(cards.clone()).unwrap_err(), DeckError::WrongSize(51));
        cards.push(cards[0]);
        assert_eq!(Deck::try_from_cards(cards).unwrap_err(), DeckError::DuplicateCards);
        assert_eq!(Deck::try_from_cards(Vec::new()).unwrap_err(), DeckError::WrongSize(0));
    }
}
