// Round API boundary. Front-ends (CLI, GUI handlers, scripted players) drive a
// round through this trait without reaching into round internals. It is
// implemented for the core `Round` type.

use crate::cards::Card;
use crate::catalog::ComboDefinition;
use crate::evaluator::ScoredCombo;
use crate::round::{DiscardResult, PlayResult, Round, RoundError};

pub trait RoundEngine {
    // Round lifecycle
    fn new_round(&mut self, previous_round_number: u32);
    fn next_round(&mut self);

    // Player actions
    fn play(&mut self, indices: &[usize]) -> Result<PlayResult, RoundError>;
    fn discard(&mut self, indices: &[usize]) -> Result<DiscardResult, RoundError>;

    // Queries
    fn hand(&self) -> &[Card];
    fn analyze(&self) -> Vec<ScoredCombo>;
    fn combo_catalog(&self) -> &'static [ComboDefinition];
    fn round_number(&self) -> u32;
    fn points(&self) -> u32;
    fn deck_len(&self) -> usize;
    fn discards_remaining(&self) -> Option<u32>;
    fn plays_remaining(&self) -> Option<u32>;
}

impl RoundEngine for Round {
    fn new_round(&mut self, previous_round_number: u32) {
        *self = Round::new_round(self.config().clone(), previous_round_number);
    }
    fn next_round(&mut self) {
        self.next_round();
    }

    fn play(&mut self, indices: &[usize]) -> Result<PlayResult, RoundError> {
        self.play(indices)
    }
    fn discard(&mut self, indices: &[usize]) -> Result<DiscardResult, RoundError> {
        self.discard(indices)
    }

    fn hand(&self) -> &[Card] {
        self.hand()
    }
    fn analyze(&self) -> Vec<ScoredCombo> {
        self.analyze()
    }
    fn combo_catalog(&self) -> &'static [ComboDefinition] {
        crate::catalog::combo_catalog()
    }
    fn round_number(&self) -> u32 {
        self.round_number()
    }
    fn points(&self) -> u32 {
        self.points()
    }
    fn deck_len(&self) -> usize {
        self.deck().len()
    }
    fn discards_remaining(&self) -> Option<u32> {
        self.discards_remaining()
    }
    fn plays_remaining(&self) -> Option<u32> {
        self.plays_remaining()
    }
}

/// Play the recommended combo until the round is cleared, plays run out or
/// the hand is empty. Returns every play made.
pub fn autoplay<E: RoundEngine + ?Sized>(engine: &mut E, target: u32) -> Vec<PlayResult> {
    let mut plays = Vec::new();
    while engine.points() < target {
        let Some(best) = engine.analyze().into_iter().next() else {
            break;
        };
        let positions = best.positions_in(engine.hand());
        match engine.play(&positions) {
            Ok(result) => plays.push(result),
            Err(err) => {
                log::info!("autoplay stopped: {err}");
                break;
            }
        }
    }
    plays
}
