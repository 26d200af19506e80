//! Error types for fizzbuzz-core.
//!
//! The Classifier itself is total. Only the bounded helpers built on it
//! can reject their input.

use thiserror::Error;

/// Errors from building a [`Sequence`](crate::Sequence).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The range end lies before its start.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: i64, end: i64 },

    /// The range holds more items than a single sequence may produce.
    #[error("sequence too long: {len} items exceeds the limit of {max}")]
    SequenceTooLong { len: u128, max: u64 },
}

/// Result alias for fizzbuzz-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
