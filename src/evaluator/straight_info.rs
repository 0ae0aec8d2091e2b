use crate::cards::Rank;

/// Information about whether five ranks run consecutively, and their top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Five distinct ranks spanning exactly four steps. Aces only play high,
    /// so A-2-3-4-5 is not a straight.
    pub fn detect(ranks: &[Rank]) -> Self {
        let mut sorted = ranks.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        match (sorted.first(), sorted.last()) {
            (Some(low), Some(high))
                if sorted.len() == 5 && ranks.len() == 5 && high.value() - low.value() == 4 =>
            {
                StraightInfo { is_straight: true, top_rank: Some(*high) }
            }
            _ => StraightInfo { is_straight: false, top_rank: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn top(cards: &str) -> Option<Rank> {
        let ranks: Vec<Rank> = parse_cards(cards).unwrap().iter().map(|c| c.rank()).collect();
        let info = StraightInfo::detect(&ranks);
        assert_eq!(info.is_straight, info.top_rank.is_some());
        info.top_rank
    }

    #[test]
    fn runs_of_five() {
        assert_eq!(top("9c Td Jh Qs Kc"), Some(Rank::King));
        assert_eq!(top("Ac Kd Qh Js Tc"), Some(Rank::Ace));
        assert_eq!(top("6h 2c 4d 3s 5c"), Some(Rank::Six));
    }

    #[test]
    fn rejected_runs() {
        // ace is high only
        assert_eq!(top("Ac 2d 3h 4s 5c"), None);
        assert_eq!(top("Ac Ad Kh Qs Jc"), None);
        assert_eq!(top("2c 3d 4h 5s"), None);
        assert_eq!(top("2c 3d 4h 5s 6c 7d"), None);
        assert_eq!(top(""), None);
    }
}
