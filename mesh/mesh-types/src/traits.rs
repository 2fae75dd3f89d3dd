//! Traits for mesh types.

use crate::{Triangle, Vertex};

/// Read-only view of a triangle mesh's topology.
///
/// Algorithms that only inspect counts, faces and positions take
/// `impl MeshTopology` so they are not tied to [`IndexedMesh`](crate::IndexedMesh).
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of triangular faces.
    fn face_count(&self) -> usize;

    /// Check if the mesh has no vertices or no faces.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Vertex at `index`, or `None` if out of bounds.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Face at `index` as vertex indices, or `None` if out of bounds.
    fn face(&self, index: usize) -> Option<[u32; 3]>;

    /// Face at `face_index` with resolved positions.
    ///
    /// Returns `None` if the face is out of bounds or references a vertex
    /// that does not exist.
    fn triangle(&self, face_index: usize) -> Option<Triangle>;

    /// Iterate over all faces as vertex index triples.
    fn faces(&self) -> impl Iterator<Item = [u32; 3]>;

    /// Iterate over the triangles of all faces whose indices are valid.
    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        (0..self.face_count()).filter_map(|i| self.triangle(i))
    }
}
