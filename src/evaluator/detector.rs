//! Membership predicates for the catalog entries.
//!
//! Each predicate looks at the whole slice it is given. The classifier and the
//! analyzer always hand over exactly the entry's required number of cards.

use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

fn ranks(cards: &[Card]) -> Vec<Rank> {
    cards.iter().map(|c| c.rank()).collect()
}

/// Ten through Ace of one suit.
pub fn is_royal_flush(cards: &[Card]) -> bool {
    cards.len() == 5
        && is_flush(cards)
        && StraightInfo::detect(&ranks(cards)).top_rank == Some(Rank::Ace)
}

pub fn is_straight_flush(cards: &[Card]) -> bool {
    is_flush(cards) && is_straight(cards)
}

pub fn is_four_of_a_kind(cards: &[Card]) -> bool {
    RankGroups::from_cards(cards).of_at_least(4).is_some()
}

/// Exactly a triple and a pair; nothing else.
pub fn is_full_house(cards: &[Card]) -> bool {
    RankGroups::from_cards(cards).counts_ascending() == [2, 3]
}

pub fn is_flush(cards: &[Card]) -> bool {
    SuitInfo::detect(cards).flush_suit.is_some()
}

pub fn is_straight(cards: &[Card]) -> bool {
    StraightInfo::detect(&ranks(cards)).is_straight
}

pub fn is_three_of_a_kind(cards: &[Card]) -> bool {
    RankGroups::from_cards(cards).of_at_least(3).is_some()
}

pub fn is_two_pair(cards: &[Card]) -> bool {
    RankGroups::from_cards(cards).ranks_with_at_least(2) >= 2
}

pub fn is_pair(cards: &[Card]) -> bool {
    matches!(cards, [a, b] if a.rank() == b.rank())
}
