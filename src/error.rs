//! Error types shared by every generator in the crate.
//!
//! Failures are never retried or clamped internally: each one is terminal
//! for the call that produced it and is returned to the immediate caller.

use std::fmt::Display;

use thiserror::Error;

pub type RandomResult<T> = Result<T, RandomError>;

#[derive(Debug, Error)]
pub enum RandomError {
    /// The secure entropy source could not produce the requested bits.
    #[error("entropy source failure: {0}")]
    EntropySource(#[from] rand::Error),

    /// An alphabet or collection was empty, or an index fell outside it.
    #[error("index {index} out of range for length {len}")]
    IndexRange { index: usize, len: usize },

    /// A bounded draw was requested over an empty or inverted range.
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: String, max: String },
}

impl RandomError {
    /// Wraps an arbitrary failure reported by an entropy source.
    pub fn entropy_failure(
        err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        RandomError::EntropySource(rand::Error::new(err))
    }

    pub fn invalid_range(min: impl Display, max: impl Display) -> Self {
        RandomError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Error for selection over an empty alphabet or collection.
    pub fn empty() -> Self {
        RandomError::IndexRange { index: 0, len: 0 }
    }

    pub fn is_entropy_source(&self) -> bool {
        matches!(self, RandomError::EntropySource(_))
    }
}
