//! Error types for mesh subdivision operations.

use thiserror::Error;

/// Errors that can occur during subdivision operations.
#[derive(Debug, Error)]
pub enum SubdivideError {
    /// Mesh has no vertices.
    #[error("Mesh has no vertices")]
    EmptyMesh,

    /// Mesh has no faces.
    #[error("Mesh has no faces")]
    NoFaces,

    /// Invalid iteration count.
    #[error("Invalid iteration count: {0} (must be >= 1)")]
    InvalidIterations(u32),

    /// Mesh would exceed maximum size.
    #[error("Subdivision would exceed maximum mesh size ({current} -> {projected} faces, max {max})")]
    MeshTooLarge {
        /// Current face count.
        current: usize,
        /// Projected face count after subdivision.
        projected: usize,
        /// Maximum allowed face count.
        max: usize,
    },

    /// A face references a vertex that does not exist.
    #[error("Face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    InvalidFaceIndex {
        /// Offending face.
        face: usize,
        /// Out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

/// Result type for subdivision operations.
pub type SubdivideResult<T> = std::result::Result<T, SubdivideError>;
