//! Crate error type.

use crate::card::Card;

/// Errors returned by the evaluator, the enumerator and the predictor.
///
/// Every variant is a caller contract violation; nothing here is transient.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The evaluator accepts 5, 6 or 7 cards.
    #[error("expected 5 to 7 cards, got {count}")]
    InvalidInput { count: usize },
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    #[error("card id {0} out of range 0..52")]
    CardOutOfRange(u8),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The exhaustive run would exceed the configured work ceiling.
    #[error("{count} combinations exceed the limit of {limit}")]
    TooManyCombinations { count: u64, limit: u64 },
    #[error("cannot parse card: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
