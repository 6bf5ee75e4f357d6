//! Poker hand evaluation and exhaustive equity.
//!
//! The evaluator classifies 5 to 7 cards into a [`HandValue`] from 4×13
//! suit bitmasks. The predictor enumerates every completion of the unseen
//! cards and tallies each player's wins.
//!
//! ```
//! use poker_equity::{evaluate, parse_cards, HandCategory};
//!
//! let cards = parse_cards("Ad Ah 3d 3c 7h 7s 7d").unwrap();
//! let value = evaluate(&cards).unwrap();
//! assert_eq!(value.category(), HandCategory::FullHouse);
//! assert_eq!(value.to_string(), "full house, 7 full of A");
//! ```

pub mod bitboard;
pub mod card;
pub mod combination;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod lut13;
pub mod predictor;
pub mod score;
pub mod value;

pub use bitboard::{BitBoard, Multiplicity, MASK13};
pub use card::{parse_cards, Card, Rank, Suit};
pub use combination::{binomial, generate, nth_subset, Combinations};
pub use deck::Deck;
pub use error::{Error, Result};
pub use evaluator::{evaluate, evaluate_board, evaluate_ids};
pub use predictor::{
    predict, EquityCounts, Prediction, Predictor, PredictorConfig, TieCredit,
    DEFAULT_MAX_COMBINATIONS,
};
pub use score::Score;
pub use value::{compare, HandCategory, HandValue};
