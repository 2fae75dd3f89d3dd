//! Loop subdivision.

// Algorithm uses many indexing operations
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use std::f64::consts::TAU;

use hashbrown::{HashMap, HashSet};
use mesh_types::{Edge, IndexedMesh, Vertex};
use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::error::{SubdivideError, SubdivideResult};
use crate::params::SubdivideParams;
use crate::result::SubdivisionResult;

/// Subdivide a mesh with one or more Loop passes.
///
/// # Errors
///
/// Returns an error if:
/// - The mesh is empty (no vertices or faces)
/// - A face references a vertex that does not exist
/// - The iteration count is 0
/// - The resulting mesh would exceed `max_faces`
///
/// # Examples
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_subdivide::{subdivide_mesh, SubdivideParams};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.add_vertices([
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.5, 1.0, 0.0),
/// ]);
/// mesh.add_face([0, 1, 2]);
///
/// let result = subdivide_mesh(&mesh, &SubdivideParams::default())?;
///
/// // Each triangle becomes 4 triangles, each edge adds a vertex
/// assert_eq!(result.final_faces, 4);
/// assert_eq!(result.final_vertices, 6);
/// # Ok::<(), mesh_subdivide::SubdivideError>(())
/// ```
pub fn subdivide_mesh(
    mesh: &IndexedMesh,
    params: &SubdivideParams,
) -> SubdivideResult<SubdivisionResult> {
    if mesh.vertices.is_empty() {
        return Err(SubdivideError::EmptyMesh);
    }
    if mesh.faces.is_empty() {
        return Err(SubdivideError::NoFaces);
    }
    if let Some((face, index)) = mesh.first_invalid_face() {
        return Err(SubdivideError::InvalidFaceIndex {
            face,
            index,
            vertex_count: mesh.vertices.len(),
        });
    }
    if params.iterations == 0 {
        return Err(SubdivideError::InvalidIterations(0));
    }

    let projected = params.expected_faces(mesh.faces.len());
    if projected > params.max_faces {
        return Err(SubdivideError::MeshTooLarge {
            current: mesh.faces.len(),
            projected,
            max: params.max_faces,
        });
    }

    let original_faces = mesh.faces.len();
    let original_vertices = mesh.vertices.len();

    debug!(
        "Subdividing mesh: {} faces, {} vertices, {} iterations",
        original_faces, original_vertices, params.iterations
    );

    let mut current = subdivide_once(mesh);
    for i in 1..params.iterations {
        debug!(
            "Iteration {}: {} faces, {} vertices",
            i,
            current.faces.len(),
            current.vertices.len()
        );
        current = subdivide_once(&current);
    }

    Ok(SubdivisionResult {
        final_faces: current.faces.len(),
        final_vertices: current.vertices.len(),
        mesh: current,
        original_faces,
        original_vertices,
        iterations: params.iterations,
    })
}

/// Perform a single Loop pass and return the new mesh.
///
/// The output holds the repositioned original vertices (same indices)
/// followed by one vertex per unique edge, in order of first use. Output
/// vertices carry positions only and the schema is empty.
///
/// # Panics
///
/// Panics if a face references a vertex that does not exist. Use
/// [`subdivide_mesh`] to validate first.
#[must_use]
pub fn subdivide_once(mesh: &IndexedMesh) -> IndexedMesh {
    let neighbors = build_vertex_neighbors(mesh);
    let edge_faces = build_edge_faces(mesh);

    let mut out = IndexedMesh::with_capacity(
        mesh.vertices.len() + edge_faces.len(),
        mesh.faces.len() * 4,
    );

    for (vi, vertex) in mesh.vertices.iter().enumerate() {
        let position = smoothed_position(&vertex.position, &neighbors[vi], &mesh.vertices);
        out.add_vertex(Vertex::new(position));
    }

    let mut edge_vertices: HashMap<Edge, u32> = HashMap::with_capacity(edge_faces.len());
    let mut interior = 0usize;

    for &[i0, i1, i2] in &mesh.faces {
        let mut edge_vertex = |a: u32, b: u32| -> u32 {
            let edge = Edge::new(a, b);
            if let Some(&idx) = edge_vertices.get(&edge) {
                return idx;
            }
            let (position, smoothed) = edge_point(edge, mesh, &edge_faces);
            interior += usize::from(smoothed);
            let idx = out.add_vertex(Vertex::new(position));
            edge_vertices.insert(edge, idx);
            idx
        };

        let a = edge_vertex(i0, i1);
        let b = edge_vertex(i1, i2);
        let c = edge_vertex(i2, i0);

        out.add_faces([[i0, a, c], [i1, b, a], [i2, c, b], [a, b, c]]);
    }

    debug!(
        edges = edge_vertices.len(),
        interior,
        faces = out.faces.len(),
        "Loop pass complete"
    );

    out
}

/// Loop vertex weight for a vertex with `valence` neighbors.
///
/// `β = (5/8 − (3 + 2·cos(2π/n))² / 64) / n`. Returns `0.0` for a valence
/// below 3, which leaves the vertex where it is.
///
/// ```
/// use mesh_subdivide::loop_beta;
///
/// assert!((loop_beta(6) - 0.0625).abs() < 1e-12);
/// assert_eq!(loop_beta(2), 0.0);
/// ```
#[must_use]
pub fn loop_beta(valence: usize) -> f64 {
    if valence < 3 {
        return 0.0;
    }
    let n = valence as f64;
    let c = 2.0f64.mul_add((TAU / n).cos(), 3.0);
    (0.625 - c * c / 64.0) / n
}

/// Extension trait giving [`IndexedMesh`] a Loop subdivision method.
pub trait LoopSubdivide {
    /// Return a new mesh after one Loop pass; `self` is untouched.
    #[must_use]
    fn loop_subdivided(&self) -> IndexedMesh;
}

impl LoopSubdivide for IndexedMesh {
    fn loop_subdivided(&self) -> IndexedMesh {
        subdivide_once(self)
    }
}

/// Distinct neighbors of every vertex, excluding itself.
fn build_vertex_neighbors(mesh: &IndexedMesh) -> Vec<HashSet<u32>> {
    let mut neighbors: Vec<HashSet<u32>> = vec![HashSet::new(); mesh.vertices.len()];

    for face in &mesh.faces {
        for &vi in face {
            for &vj in face {
                if vi != vj {
                    neighbors[vi as usize].insert(vj);
                }
            }
        }
    }

    neighbors
}

/// Faces using each edge, each face listed once.
fn build_edge_faces(mesh: &IndexedMesh) -> HashMap<Edge, Vec<usize>> {
    let mut edge_faces: HashMap<Edge, Vec<usize>> = HashMap::with_capacity(mesh.faces.len() * 3 / 2);

    for (fi, &face) in mesh.faces.iter().enumerate() {
        for edge in Edge::of_face(face) {
            let faces = edge_faces.entry(edge).or_default();
            if faces.last() != Some(&fi) {
                faces.push(fi);
            }
        }
    }

    edge_faces
}

/// Apply the Loop vertex rule.
fn smoothed_position(
    position: &Point3<f64>,
    neighbors: &HashSet<u32>,
    vertices: &[Vertex],
) -> Point3<f64> {
    let n = neighbors.len();
    if n < 3 {
        return *position;
    }

    let beta = loop_beta(n);
    let sum: Vector3<f64> = neighbors
        .iter()
        .map(|&ni| vertices[ni as usize].position.coords)
        .sum();

    Point3::from(position.coords * (n as f64).mul_add(-beta, 1.0) + sum * beta)
}

/// Position of the new vertex on `edge`, and whether the interior rule applied.
fn edge_point(
    edge: Edge,
    mesh: &IndexedMesh,
    edge_faces: &HashMap<Edge, Vec<usize>>,
) -> (Point3<f64>, bool) {
    let (v1, v2) = edge.vertices();
    let p1 = mesh.vertices[v1 as usize].position.coords;
    let p2 = mesh.vertices[v2 as usize].position.coords;

    let opposites = edge_faces
        .get(&edge)
        .filter(|faces| faces.len() == 2)
        .and_then(|faces| {
            let a = edge.opposite_in(mesh.faces[faces[0]])?;
            let b = edge.opposite_in(mesh.faces[faces[1]])?;
            Some((a, b))
        });

    match opposites {
        Some((a, b)) => {
            let pa = mesh.vertices[a as usize].position.coords;
            let pb = mesh.vertices[b as usize].position.coords;
            (Point3::from((p1 + p2) * 0.375 + (pa + pb) * 0.125), true)
        }
        None => (Point3::from((p1 + p2) * 0.5), false),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{MeshTopology, VertexProperty};
    use proptest::prelude::*;

    fn make_triangle() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.add_vertices([
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.5, 1.0, 0.0),
        ]);
        mesh.add_face([0, 1, 2]);
        mesh
    }

    fn make_two_triangles() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.add_vertices([
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.5, 1.0, 0.0),
            Vertex::from_coords(2.0, 2.0, 1.0),
        ]);
        mesh.add_faces([[0, 1, 2], [1, 3, 2]]);
        mesh
    }

    fn make_tetrahedron() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.add_vertices([
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
            Vertex::from_coords(0.0, 0.0, 1.0),
        ]);
        mesh.add_faces([[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]]);
        mesh
    }

    fn make_grid(width: usize, height: usize, heights: &[f64]) -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        for j in 0..height {
            for i in 0..width {
                let z = heights[(j * width + i) % heights.len()];
                mesh.add_vertex(Vertex::from_coords(i as f64, j as f64, z));
            }
        }
        for j in 0..height - 1 {
            for i in 0..width - 1 {
                let v = (j * width + i) as u32;
                let w = width as u32;
                mesh.add_faces([[v, v + 1, v + w + 1], [v, v + w + 1, v + w]]);
            }
        }
        mesh
    }

    #[test]
    fn test_subdivide_empty_mesh() {
        let mesh = IndexedMesh::new();
        let result = subdivide_mesh(&mesh, &SubdivideParams::default());
        assert!(matches!(result, Err(SubdivideError::EmptyMesh)));
    }

    #[test]
    fn test_subdivide_no_faces() {
        let mut mesh = IndexedMesh::new();
        mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
        let result = subdivide_mesh(&mesh, &SubdivideParams::default());
        assert!(matches!(result, Err(SubdivideError::NoFaces)));
    }

    #[test]
    fn test_subdivide_zero_iterations() {
        let mesh = make_triangle();
        let params = SubdivideParams::new().with_iterations(0);
        let result = subdivide_mesh(&mesh, &params);
        assert!(matches!(result, Err(SubdivideError::InvalidIterations(0))));
    }

    #[test]
    fn test_subdivide_too_large() {
        let mesh = make_triangle();
        let params = SubdivideParams::new().with_iterations(2).with_max_faces(10);
        let result = subdivide_mesh(&mesh, &params);
        assert!(matches!(result, Err(SubdivideError::MeshTooLarge { projected: 16, .. })));
    }

    #[test]
    fn test_subdivide_invalid_index() {
        let mut mesh = make_triangle();
        mesh.add_face([0, 2, 5]);
        let result = subdivide_mesh(&mesh, &SubdivideParams::default());
        assert!(matches!(
            result,
            Err(SubdivideError::InvalidFaceIndex {
                face: 1,
                index: 5,
                vertex_count: 3
            })
        ));
    }

    #[test]
    fn test_single_triangle_uses_midpoints() {
        let mesh = make_triangle();
        let out = subdivide_once(&mesh);

        assert_eq!(out.vertex_count(), 6);
        assert_eq!(out.face_count(), 4);

        // Valence 2: corners stay put.
        for i in 0..3 {
            assert_eq!(out.vertices[i].position, mesh.vertices[i].position);
        }
        // Edge (0,1) is the first new vertex.
        assert_relative_eq!(out.vertices[3].position, Point3::new(0.5, 0.0, 0.0));
        assert_eq!(out.faces[0], [0, 3, 5]);
        assert_eq!(out.faces[3], [3, 4, 5]);
    }

    #[test]
    fn test_shared_edge_uses_loop_rule() {
        let mesh = make_two_triangles();
        let out = subdivide_once(&mesh);

        assert_eq!(out.face_count(), 8);
        // 4 original + 5 unique edges
        assert_eq!(out.vertex_count(), 9);

        // Face 0 creates (0,1), (1,2), (2,0): edge (1,2) is index 5.
        assert_relative_eq!(
            out.vertices[5].position,
            Point3::new(0.8125, 0.625, 0.125),
            epsilon = 1e-12
        );

        // Vertex 1 has neighbors {0, 2, 3}: β(3) = 3/16.
        assert_relative_eq!(
            out.vertices[1].position,
            Point3::new(0.90625, 0.5625, 0.1875),
            epsilon = 1e-12
        );
        // Vertex 0 has only two neighbors.
        assert_eq!(out.vertices[0].position, mesh.vertices[0].position);
    }

    #[test]
    fn test_non_manifold_edge_uses_midpoint() {
        let mut mesh = make_two_triangles();
        mesh.add_vertex(Vertex::from_coords(1.0, 1.0, -3.0));
        mesh.add_face([1, 2, 4]);

        let out = subdivide_once(&mesh);
        assert_relative_eq!(
            out.vertices[6].position,
            Point3::new(0.75, 0.5, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_tetrahedron_stays_closed() {
        let mesh = make_tetrahedron();
        let result = subdivide_mesh(&mesh, &SubdivideParams::new().with_iterations(2)).unwrap();

        assert_eq!(result.final_faces, 64);
        // 4 + 6 = 10, then 10 + 24 = 34
        assert_eq!(result.final_vertices, 34);
        assert!(result.mesh.is_closed());
        assert!(result.mesh.validate_indices());
    }

    #[test]
    fn test_input_untouched_and_attributes_dropped() {
        let mut mesh = make_tetrahedron();
        mesh.update_normals();
        let before = mesh.clone();

        let out = mesh.loop_subdivided();

        assert_eq!(mesh, before);
        assert!(out.schema().is_empty());
        assert!(out.vertices.iter().all(|v| v.attributes.is_empty()));
        assert!(mesh.schema().contains(VertexProperty::Nx));
    }

    #[test]
    fn test_beta_values() {
        assert_relative_eq!(loop_beta(3), 3.0 / 16.0, epsilon = 1e-12);
        assert_relative_eq!(loop_beta(6), 1.0 / 16.0, epsilon = 1e-12);
        assert_eq!(loop_beta(0), 0.0);
        assert_eq!(loop_beta(2), 0.0);
    }

    proptest! {
        #[test]
        fn counts_follow_edges(
            width in 2usize..7,
            height in 2usize..7,
            heights in proptest::collection::vec(-1.0f64..1.0, 1..16),
        ) {
            let mesh = make_grid(width, height, &heights);
            let out = subdivide_once(&mesh);

            prop_assert_eq!(out.vertex_count(), mesh.vertex_count() + mesh.unique_edge_count());
            prop_assert_eq!(out.face_count(), 4 * mesh.face_count());
            prop_assert!(out.validate_indices());
            prop_assert_eq!(out.boundary_edge_count(), 2 * mesh.boundary_edge_count());
        }
    }
}
