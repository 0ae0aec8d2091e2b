use crate::cards::{Card, Rank};

/// Groups ranks by their frequency in a set of cards, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Count ranks over any number of cards.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        for card in cards {
            rank_counts[card.rank().value() as usize] += 1;
        }
        Self::from_counts(&rank_counts)
    }

    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = Vec::new();

        for rank in Rank::ALL.iter().copied() {
            let count = rank_counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
            }
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Highest rank appearing at least `n` times.
    pub fn of_at_least(&self, n: u8) -> Option<Rank> {
        self.groups.iter().filter(|(_, count)| *count >= n).map(|(rank, _)| *rank).max()
    }

    /// Number of distinct ranks appearing at least `n` times.
    pub fn ranks_with_at_least(&self, n: u8) -> usize {
        self.groups.iter().filter(|(_, count)| *count >= n).count()
    }

    /// Nonzero rank counts in ascending order, e.g. [2, 3] for a full house.
    pub fn counts_ascending(&self) -> Vec<u8> {
        let mut counts: Vec<u8> = self.groups.iter().map(|(_, count)| *count).collect();
        counts.sort_unstable();
        counts
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
