//! Indexed triangle mesh.

use hashbrown::HashMap;

use crate::{AttributeSchema, Edge, MeshTopology, Triangle, Vertex, VertexProperty};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// The mesh exclusively owns its vertex array, its face array and the
/// schema of attribute columns that are present on its vertices. Faces
/// reference vertices by `u32` index only.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - Vertex positions and attributes
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
/// - `schema`: registered attribute columns, in serialization order
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex, MeshTopology};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.add_vertices([
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// ]);
/// mesh.add_face([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// assert_eq!(mesh.boundary_edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,

    /// Attribute columns registered on this mesh.
    pub schema: AttributeSchema,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            schema: AttributeSchema::new(),
        }
    }

    /// Create an empty mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            schema: AttributeSchema::new(),
        }
    }

    /// Create a mesh from vertices and faces with an empty schema.
    ///
    /// Indices are not checked; see [`validate_indices`](Self::validate_indices).
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            faces,
            schema: AttributeSchema::new(),
        }
    }

    /// Append a vertex and return its index.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Append vertices in order.
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Vertex>) {
        self.vertices.extend(vertices);
    }

    /// Append a face.
    #[inline]
    pub fn add_face(&mut self, face: [u32; 3]) {
        self.faces.push(face);
    }

    /// Append faces in order.
    pub fn add_faces(&mut self, faces: impl IntoIterator<Item = [u32; 3]>) {
        self.faces.extend(faces);
    }

    /// Reserve capacity for additional vertices and faces.
    pub fn reserve(&mut self, additional_vertices: usize, additional_faces: usize) {
        self.vertices.reserve(additional_vertices);
        self.faces.reserve(additional_faces);
    }

    /// Registered attribute columns.
    #[inline]
    #[must_use]
    pub const fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    /// Register an attribute column.
    ///
    /// Vertices lacking the attribute are serialized with `0.0` in that column.
    pub fn register_attribute(&mut self, property: VertexProperty) {
        self.schema.register(property);
    }

    /// Find the first face referencing a vertex that does not exist.
    ///
    /// Returns `(face_index, bad_vertex_index)`.
    #[must_use]
    pub fn first_invalid_face(&self) -> Option<(usize, u32)> {
        let n = self.vertices.len();
        self.faces.iter().enumerate().find_map(|(fi, face)| {
            face.iter()
                .find(|&&v| v as usize >= n)
                .map(|&v| (fi, v))
        })
    }

    /// Check that every face index refers to an existing vertex.
    #[inline]
    #[must_use]
    pub fn validate_indices(&self) -> bool {
        self.first_invalid_face().is_none()
    }

    /// Count how many faces use each undirected edge.
    #[must_use]
    pub fn edge_face_counts(&self) -> HashMap<Edge, usize> {
        let mut counts: HashMap<Edge, usize> = HashMap::with_capacity(self.faces.len() * 3 / 2);
        for &face in &self.faces {
            for edge in Edge::of_face(face) {
                *counts.entry(edge).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn unique_edge_count(&self) -> usize {
        self.edge_face_counts().len()
    }

    /// Number of edges used by exactly one face.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_face_counts().values().filter(|&&c| c == 1).count()
    }

    /// Check that every edge is shared by exactly two faces.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.faces.is_empty() && self.edge_face_counts().values().all(|&c| c == 2)
    }

    /// Total area of all faces with valid indices.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        let [i0, i1, i2] = *self.faces.get(face_index)?;
        Some(Triangle::new(
            self.vertices.get(i0 as usize)?.position,
            self.vertices.get(i1 as usize)?.position,
            self.vertices.get(i2 as usize)?.position,
        ))
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().copied()
    }
}
