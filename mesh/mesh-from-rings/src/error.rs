//! Error types for ring-to-mesh operations.

use thiserror::Error;

/// Result type for ring-to-mesh operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while normalizing or stitching rings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    /// Not enough rings.
    #[error("need at least {min} rings, got {actual}")]
    TooFewRings {
        /// Minimum required rings.
        min: usize,
        /// Actual ring count.
        actual: usize,
    },

    /// A ring has too few points.
    #[error("ring {ring} needs at least {min} points, got {actual}")]
    TooFewPoints {
        /// Position of the ring in the input.
        ring: usize,
        /// Minimum required points.
        min: usize,
        /// Actual point count.
        actual: usize,
    },
}
