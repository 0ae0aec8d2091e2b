//! balatro-poker: poker combo classification, scoring and hand analysis
//! in the style of Balatro.
//!
//! - A fixed catalog of nine combos, each with a required card count, a
//!   predicate and a `(base, multiplier)` score pair
//! - `classify` for played cards, `analyze` for every combo in a hand
//! - `Round` tracks deck, hand, played and discarded piles with limits
//!
//! Scores are `(base + sum of card chips) * multiplier`.
//!
//! ## Quick start: rank the combos in a hand
//! ```
//! use balatro_poker::cards::parse_cards;
//! use balatro_poker::catalog::Combo;
//! use balatro_poker::evaluator::{analyze, classify};
//!
//! let hand = parse_cards("Ts Js Qs Ks As 2h 2d 7c").unwrap();
//! let ranked = analyze(&hand);
//! assert_eq!(ranked[0].combo, Combo::RoyalFlush);
//! assert_eq!(ranked[0].score, 1208);
//!
//! let played = parse_cards("Kd Kc Kh").unwrap();
//! assert_eq!(classify(&played).combo, Combo::ThreeOfAKind);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin balatro-poker -- analyze "2s 2h 7c 9d 9s Kd Kc Kh"
//! ```

pub mod cards;
pub mod catalog;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod hand;
pub mod logging;
pub mod round;
pub mod scoring;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
