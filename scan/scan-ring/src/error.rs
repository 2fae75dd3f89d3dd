//! Error types for ring preprocessing.

use thiserror::Error;

/// Result type for ring preprocessing.
pub type RingResult<T> = Result<T, RingError>;

/// Errors that can occur while preprocessing rings.
///
/// Degenerate input is not an error: an empty or all-zero slice simply
/// yields no ring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    /// Parameters cannot produce a valid ring.
    #[error("invalid ring parameters: {reason}")]
    InvalidParams {
        /// What is wrong.
        reason: String,
    },
}

impl RingError {
    /// Create an `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}
