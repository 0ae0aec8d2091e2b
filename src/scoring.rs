use crate::cards::Card;

/// Score a set of cards: `(base + Σ chip values) * multiplier`.
///
/// ```
/// use balatro_poker::cards::parse_cards;
/// use balatro_poker::scoring::score;
///
/// let kings = parse_cards("Kd Kc Kh").unwrap();
/// assert_eq!(score(30, 3, &kings), 180);
/// ```
pub fn score(base: u32, multiplier: u32, cards: &[Card]) -> u32 {
    (base + chip_total(cards)) * multiplier
}

/// Sum of chip values.
pub fn chip_total(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.chip_value()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn empty_selection_scores_base_only() {
        assert_eq!(score(5, 1, &[]), 5);
        assert_eq!(score(10, 2, &[]), 20);
    }

    #[test]
    fn royal_flush_chips() {
        let royal = parse_cards("Ts Js Qs Ks As").unwrap();
        assert_eq!(chip_total(&royal), 51);
        assert_eq!(score(100, 8, &royal), 1208);
    }
}
