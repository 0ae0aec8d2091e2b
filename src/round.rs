use crate::cards::Card;
use crate::catalog::Combo;
use crate::deck::Deck;
use crate::evaluator::{analyze, classify, recommend, ScoredCombo};
use crate::hand::{Hand, HAND_SIZE};
use rand::Rng;

/// Per-round rules. The defaults follow the desktop game: an 8-card hand,
/// five discards, unlimited plays and a 300 point target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    pub hand_size: usize,
    pub discard_limit: Option<u32>,
    pub play_limit: Option<u32>,
    pub required_points: u32,
    /// Base seed for reproducible shuffles; round `n` shuffles with `seed + n`.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            discard_limit: Some(5),
            play_limit: None,
            required_points: 300,
            seed: None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("deck is empty")]
    DeckEmpty,
    #[error("no cards selected")]
    NoSelection,
    #[error("discard limit of {limit} reached")]
    DiscardLimitReached { limit: u32 },
    #[error("play limit of {limit} reached")]
    PlayLimitReached { limit: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayResult {
    pub combo: Combo,
    pub score: u32,
    /// Played cards in selection order.
    pub cards: Vec<Card>,
    /// Cards drawn to refill the hand afterwards.
    pub dealt: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DiscardResult {
    pub count: usize,
    pub dealt: usize,
}

/// State of one round: the deck, the hand, both piles and the counters.
///
/// Every card of the 52 is in exactly one of deck, hand, played or discarded.
///
/// ```
/// use balatro_poker::round::{Round, RoundConfig};
///
/// let mut round = Round::new(RoundConfig { seed: Some(7), ..RoundConfig::default() });
/// assert_eq!(round.round_number(), 1);
/// assert_eq!(round.hand().len(), 8);
///
/// let played = round.play(&[0, 1]).unwrap();
/// assert_eq!(played.cards.len(), 2);
/// assert_eq!(round.hand().len(), 8);
/// assert_eq!(round.points(), played.score);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    round_number: u32,
    seed: u64,
    deck: Deck,
    hand: Hand,
    played: Vec<Card>,
    discarded: Vec<Card>,
    plays_used: u32,
    discards_used: u32,
    points: u32,
}

impl Round {
    /// First round of a session.
    pub fn new(config: RoundConfig) -> Self {
        Self::new_round(config, 0)
    }

    /// Fresh shuffled deck, full hand, empty piles, counters reset.
    pub fn new_round(config: RoundConfig, previous_round_number: u32) -> Self {
        let round_number = previous_round_number.saturating_add(1);
        let seed = match config.seed {
            Some(base) => base.wrapping_add(u64::from(round_number)),
            None => rand::rng().random(),
        };
        let deck = Deck::shuffled(seed);
        log::info!("round {round_number} started (seed {seed})");

        let mut round = Self {
            config,
            round_number,
            seed,
            deck,
            hand: Hand::default(),
            played: Vec::new(),
            discarded: Vec::new(),
            plays_used: 0,
            discards_used: 0,
            points: 0,
        };
        round.refill();
        round
    }

    /// First round dealt from a prepared deck instead of a shuffled one.
    /// `Deck::try_from_cards` guarantees it holds all 52 cards once.
    pub fn with_deck(config: RoundConfig, deck: Deck) -> Self {
        let mut round = Self {
            seed: config.seed.unwrap_or_default(),
            config,
            round_number: 1,
            deck,
            hand: Hand::default(),
            played: Vec::new(),
            discarded: Vec::new(),
            plays_used: 0,
            discards_used: 0,
            points: 0,
        };
        round.refill();
        round
    }

    /// Replace this round with the next one under the same config.
    pub fn next_round(&mut self) {
        *self = Self::new_round(self.config.clone(), self.round_number);
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Seed the deck of this round was shuffled with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand(&self) -> &[Card] {
        self.hand.as_slice()
    }

    pub fn played(&self) -> &[Card] {
        &self.played
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn required_points(&self) -> u32 {
        self.config.required_points
    }

    /// True once the round's points reach the target.
    pub fn is_cleared(&self) -> bool {
        self.points >= self.config.required_points
    }

    /// `None` when discards are unlimited.
    pub fn discards_remaining(&self) -> Option<u32> {
        self.config.discard_limit.map(|limit| limit.saturating_sub(self.discards_used))
    }

    /// `None` when plays are unlimited.
    pub fn plays_remaining(&self) -> Option<u32> {
        self.config.play_limit.map(|limit| limit.saturating_sub(self.plays_used))
    }

    /// Move the top card of the deck into the hand.
    pub fn deal(&mut self) -> Result<Card, RoundError> {
        let card = self.deck.draw().ok_or(RoundError::DeckEmpty)?;
        self.hand.push(card);
        Ok(card)
    }

    /// Deal until the hand is full or the deck runs out. Returns cards dealt.
    fn refill(&mut self) -> usize {
        let mut dealt = 0;
        while self.hand.len() < self.config.hand_size {
            match self.deal() {
                Ok(_) => dealt += 1,
                Err(err) => {
                    log::debug!("refill stopped at {} cards: {err}", self.hand.len());
                    break;
                }
            }
        }
        dealt
    }

    /// Play the cards at `indices` (0-based). Out-of-range and repeated
    /// indices are ignored. The played cards are classified in the order given
    /// and every one of them counts towards the score.
    pub fn play(&mut self, indices: &[usize]) -> Result<PlayResult, RoundError> {
        if let Some(limit) = self.config.play_limit {
            if self.plays_used >= limit {
                return Err(RoundError::PlayLimitReached { limit });
            }
        }
        let selection = self.hand.select(indices);
        if !selection.dropped.is_empty() {
            log::debug!("play ignored indices {:?}", selection.dropped);
        }
        if selection.is_empty() {
            return Err(RoundError::NoSelection);
        }

        let cards = self.hand.take(&selection);
        let classification = classify(&cards);
        let score = classification.score.apply(&cards);
        self.played.extend_from_slice(&cards);
        self.plays_used += 1;
        self.points += score;
        let dealt = self.refill();
        log::info!(
            "played {} for {score} ({} / {} points)",
            classification.combo,
            self.points,
            self.config.required_points
        );
        Ok(PlayResult { combo: classification.combo, score, cards, dealt })
    }

    /// Discard the cards at `indices` (0-based) and draw replacements.
    pub fn discard(&mut self, indices: &[usize]) -> Result<DiscardResult, RoundError> {
        if let Some(limit) = self.config.discard_limit {
            if self.discards_used >= limit {
                return Err(RoundError::DiscardLimitReached { limit });
            }
        }
        let selection = self.hand.select(indices);
        if !selection.dropped.is_empty() {
            log::debug!("discard ignored indices {:?}", selection.dropped);
        }
        if selection.is_empty() {
            return Err(RoundError::NoSelection);
        }

        let cards = self.hand.take(&selection);
        let count = cards.len();
        self.discarded.extend(cards);
        self.discards_used += 1;
        let dealt = self.refill();
        log::info!("discarded {count} cards, drew {dealt}");
        Ok(DiscardResult { count, dealt })
    }

    /// Ranked combos available in the current hand.
    pub fn analyze(&self) -> Vec<ScoredCombo> {
        analyze(self.hand.as_slice())
    }

    /// Best combo in the hand with its 0-based hand positions.
    pub fn recommendation(&self) -> Option<(ScoredCombo, Vec<usize>)> {
        recommend(self.hand.as_slice()).map(|best| {
            let positions = best.positions_in(self.hand.as_slice());
            (best, positions)
        })
    }
}
