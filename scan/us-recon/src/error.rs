//! Error types for the reconstruction pipeline.

use mesh_from_rings::CurveError;
use mesh_io::IoError;
use mesh_subdivide::SubdivideError;
use scan_io::ScanIoError;
use scan_ring::RingError;
use thiserror::Error;

/// Result type for reconstruction.
pub type ReconResult<T> = Result<T, ReconError>;

/// Errors that can occur while reconstructing a surface.
#[derive(Debug, Error)]
pub enum ReconError {
    /// The configuration is inconsistent.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong.
        reason: String,
    },

    /// Too few slices produced a usable ring.
    #[error("need at least {min} usable slices, got {actual}")]
    TooFewRings {
        /// Minimum usable slices.
        min: usize,
        /// Usable slices found.
        actual: usize,
    },

    /// Ring preprocessing failed.
    #[error(transparent)]
    Ring(#[from] RingError),

    /// Ring normalization or stitching failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Subdivision failed.
    #[error(transparent)]
    Subdivide(#[from] SubdivideError),

    /// Mesh file I/O failed.
    #[error(transparent)]
    MeshIo(#[from] IoError),

    /// Reading a slice source failed.
    #[error(transparent)]
    Scan(#[from] ScanIoError),
}

impl ReconError {
    /// Create an `InvalidConfig` error with the given reason.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
