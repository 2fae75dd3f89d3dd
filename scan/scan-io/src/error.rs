//! Error types for slice sources.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for slice source operations.
pub type ScanIoResult<T> = Result<T, ScanIoError>;

/// Errors that can occur while reading images or point logs.
#[derive(Debug, Error)]
pub enum ScanIoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The bytes are not a bitmap this crate understands.
    #[error("invalid BMP: {reason}")]
    InvalidBmp {
        /// What was wrong.
        reason: String,
    },

    /// Input ended before the declared amount of data.
    #[error("truncated data: expected {expected} bytes, got {got}")]
    Truncated {
        /// Bytes required.
        expected: usize,
        /// Bytes available.
        got: usize,
    },

    /// Only 8, 24 and 32 bits per pixel are supported.
    #[error("unsupported bit depth: {bits} bits per pixel")]
    UnsupportedBitDepth {
        /// Bits per pixel from the header.
        bits: u16,
    },

    /// Index past the end of a collection.
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of items available.
        len: usize,
    },

    /// The image stack already holds its configured number of images.
    #[error("image stack is full ({capacity} images)")]
    StackFull {
        /// Configured capacity.
        capacity: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanIoError {
    /// Create an `InvalidBmp` error with the given reason.
    #[must_use]
    pub fn invalid_bmp(reason: impl Into<String>) -> Self {
        Self::InvalidBmp {
            reason: reason.into(),
        }
    }

    /// Map an open failure to `FileNotFound` when the file is missing.
    pub(crate) fn from_open(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }
}
