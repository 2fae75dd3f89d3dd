//! Error types for mesh I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during mesh I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but there are {vertex_count} vertices")]
    InvalidFaceIndex {
        /// Offending face, counted in file order.
        face: usize,
        /// The out-of-range index as stored.
        index: i64,
        /// Number of vertices available.
        vertex_count: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IoError::InvalidFaceIndex {
            face: 2,
            index: -1,
            vertex_count: 8,
        };
        assert_eq!(
            err.to_string(),
            "face 2 references vertex -1, but there are 8 vertices"
        );
        assert_eq!(
            IoError::invalid_content("missing x").to_string(),
            "invalid file content: missing x"
        );
    }
}
