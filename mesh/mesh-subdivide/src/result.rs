//! Result types for subdivision operations.

// Face counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use mesh_types::IndexedMesh;

/// Result of mesh subdivision.
#[derive(Debug, Clone)]
pub struct SubdivisionResult {
    /// The subdivided mesh.
    pub mesh: IndexedMesh,

    /// Number of faces in original mesh.
    pub original_faces: usize,

    /// Number of faces in subdivided mesh.
    pub final_faces: usize,

    /// Number of vertices in original mesh.
    pub original_vertices: usize,

    /// Number of vertices in subdivided mesh.
    pub final_vertices: usize,

    /// Number of iterations performed.
    pub iterations: u32,
}

impl SubdivisionResult {
    /// Get the face multiplication factor.
    #[must_use]
    pub fn face_ratio(&self) -> f64 {
        if self.original_faces == 0 {
            1.0
        } else {
            self.final_faces as f64 / self.original_faces as f64
        }
    }

    /// Check if any subdivision occurred.
    #[must_use]
    pub const fn was_subdivided(&self) -> bool {
        self.iterations > 0 && self.final_faces > self.original_faces
    }
}

impl std::fmt::Display for SubdivisionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Loop subdivision: {} → {} faces ({:.1}x), {} → {} vertices, {} iterations",
            self.original_faces,
            self.final_faces,
            self.face_ratio(),
            self.original_vertices,
            self.final_vertices,
            self.iterations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(iterations: u32, final_faces: usize) -> SubdivisionResult {
        SubdivisionResult {
            mesh: IndexedMesh::new(),
            original_faces: 100,
            final_faces,
            original_vertices: 52,
            final_vertices: 202,
            iterations,
        }
    }

    #[test]
    fn test_face_ratio() {
        assert!((report(1, 400).face_ratio() - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_was_subdivided() {
        assert!(!report(0, 100).was_subdivided());
        assert!(report(1, 400).was_subdivided());
    }

    #[test]
    fn test_display() {
        let display = format!("{}", report(1, 400));
        assert!(display.contains("100 → 400 faces"));
        assert!(display.contains("4.0x"));
        assert!(display.contains("52 → 202 vertices"));
    }
}
