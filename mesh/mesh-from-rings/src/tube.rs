//! Tube stitching between consecutive rings.

// Vertex indices are u32
#![allow(clippy::cast_possible_truncation)]

use mesh_types::{IndexedMesh, Vertex};
use nalgebra::Point3;
use tracing::debug;

use crate::error::{CurveError, CurveResult};

/// Triangulate a closed shell through an ordered sequence of rings.
///
/// Vertices are the concatenation of all ring points in ring order, so
/// ring `k` starts at the sum of the lengths before it. Rings may differ in
/// length.
///
/// Each consecutive pair `(A, B)` with offset `s`, lengths `l1`, `l2` and
/// `m = min(l1, l2)` gets, for `j < m − 1`,
/// `[s+j, s+j+1, s+l1+j]` and `[s+j+1, s+l1+j+1, s+l1+j]`, plus the seam
/// quad `[s+l1−1, s, s+l1+l2−1]`, `[s, s+l1, s+l1+l2−1]`.
///
/// The last ring is then stitched back onto the first with reversed
/// correspondence: point `j` of the last ring faces point `len − 1 − j` of
/// the first. Its seam quad follows the same reversal, so with three or
/// more equal-length rings every edge is shared by exactly two faces.
/// Winding is not consistent across that wrap seam: the first and the wrap
/// strip both traverse the first ring's edges in the same direction, so
/// vertex normals there mix opposing face normals.
///
/// # Errors
///
/// Returns [`CurveError::TooFewRings`] for fewer than two rings and
/// [`CurveError::TooFewPoints`] for a ring with fewer than two points.
///
/// # Example
///
/// ```
/// use mesh_from_rings::build_tube;
/// use mesh_types::MeshTopology;
/// use nalgebra::Point3;
///
/// let square = |z: f64| vec![
///     Point3::new(0.0, 0.0, z),
///     Point3::new(1.0, 0.0, z),
///     Point3::new(1.0, 1.0, z),
///     Point3::new(0.0, 1.0, z),
/// ];
///
/// let mesh = build_tube(&[square(0.0), square(1.0)])?;
/// assert_eq!(mesh.vertex_count(), 8);
/// // 8 triangles for the pair, 8 more closing back onto the first ring.
/// assert_eq!(mesh.face_count(), 16);
/// # Ok::<(), mesh_from_rings::CurveError>(())
/// ```
pub fn build_tube(rings: &[Vec<Point3<f64>>]) -> CurveResult<IndexedMesh> {
    if rings.len() < 2 {
        return Err(CurveError::TooFewRings {
            min: 2,
            actual: rings.len(),
        });
    }
    if let Some((ring, points)) = rings.iter().enumerate().find(|(_, r)| r.len() < 2) {
        return Err(CurveError::TooFewPoints {
            ring,
            min: 2,
            actual: points.len(),
        });
    }

    let vertex_count: usize = rings.iter().map(Vec::len).sum();
    let face_count: usize = rings
        .iter()
        .zip(rings.iter().cycle().skip(1))
        .map(|(a, b)| 2 * a.len().min(b.len()))
        .sum();

    let mut mesh = IndexedMesh::with_capacity(vertex_count, face_count);
    mesh.add_vertices(rings.iter().flatten().map(|&p| Vertex::new(p)));

    let mut start = 0u32;
    for pair in rings.windows(2) {
        let (l1, l2) = (pair[0].len() as u32, pair[1].len() as u32);
        let m = l1.min(l2);

        for j in 0..m - 1 {
            let a = start + j;
            let b = start + j + 1;
            let c = start + l1 + j;
            let d = start + l1 + j + 1;
            mesh.add_faces([[a, b, c], [b, d, c]]);
        }

        let last1 = start + l1 - 1;
        let last2 = start + l1 + l2 - 1;
        mesh.add_faces([[last1, start, last2], [start, start + l1, last2]]);

        start += l1;
    }

    // Last ring back onto the first, walking the first ring backwards.
    let l1 = rings[rings.len() - 1].len() as u32;
    let l2 = rings[0].len() as u32;
    let m = l1.min(l2);
    for j in 0..m - 1 {
        let a = start + j;
        let b = start + j + 1;
        let c = l2 - j - 1;
        let d = l2 - j - 2;
        mesh.add_faces([[a, b, c], [b, d, c]]);
    }
    mesh.add_faces([[start + l1 - 1, start, 0], [start, l2 - 1, 0]]);

    debug!(
        rings = rings.len(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Stitched tube mesh"
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::MeshTopology;

    fn square(z: f64) -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(1.0, 1.0, z),
            Point3::new(0.0, 1.0, z),
        ]
    }

    fn circle_rings(rings: usize, points: usize) -> Vec<Vec<Point3<f64>>> {
        (0..rings)
            .map(|r| {
                let angle = std::f64::consts::PI * r as f64 / rings as f64;
                (0..points)
                    .map(|i| {
                        let t = std::f64::consts::PI * i as f64 / (points - 1) as f64;
                        Point3::new(t.sin() * angle.cos(), t.cos(), t.sin() * angle.sin())
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn two_square_rings() {
        let mesh = build_tube(&[square(0.0), square(1.0)]).unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        // Ring B starts at index 4.
        assert_eq!(mesh.vertices[4].position, Point3::new(0.0, 0.0, 1.0));

        let pair = &mesh.faces[..8];
        assert_eq!(
            pair,
            &[
                [0, 1, 4],
                [1, 5, 4],
                [1, 2, 5],
                [2, 6, 5],
                [2, 3, 6],
                [3, 7, 6],
                [3, 0, 7],
                [0, 4, 7],
            ]
        );

        let wrap = &mesh.faces[8..];
        assert_eq!(wrap.len(), 8);
        assert_eq!(wrap[0], [4, 5, 3]);
        assert_eq!(wrap[1], [5, 2, 3]);
        assert_eq!(wrap[6], [7, 4, 0]);
        assert_eq!(wrap[7], [4, 3, 0]);
        assert!(mesh.validate_indices());
    }

    #[test]
    fn twelve_rings_close() {
        let mesh = build_tube(&circle_rings(12, 49)).unwrap();

        assert_eq!(mesh.vertex_count(), 12 * 49);
        assert_eq!(mesh.face_count(), 12 * 98);
        assert_eq!(mesh.boundary_edge_count(), 0);
        assert!(mesh.is_closed());
    }

    #[test]
    fn wrap_strip_repeats_first_ring_direction() {
        let mesh = build_tube(&circle_rings(12, 49)).unwrap();
        let directed = |from: u32, to: u32| {
            mesh.faces
                .iter()
                .filter(|f| (0..3).any(|k| f[k] == from && f[(k + 1) % 3] == to))
                .count()
        };

        // Interior rings are consistently wound.
        assert_eq!(directed(59, 60), 1);
        assert_eq!(directed(60, 59), 1);

        // First-ring edges run the same way in both strips.
        assert_eq!(directed(10, 11), 2);
        assert_eq!(directed(11, 10), 0);
    }

    #[test]
    fn eleven_rings_close() {
        let mesh = build_tube(&circle_rings(11, 49)).unwrap();

        assert_eq!(mesh.face_count(), 11 * 98);
        assert!(mesh.is_closed());
    }

    #[test]
    fn uneven_ring_lengths() {
        let mut rings = vec![square(0.0), square(1.0), square(2.0)];
        rings[1].push(Point3::new(0.5, 0.5, 1.0));

        let mesh = build_tube(&rings).unwrap();
        assert_eq!(mesh.vertex_count(), 13);
        // Ring 2 starts after 4 + 5 points.
        assert_eq!(mesh.vertices[9].position, Point3::new(0.0, 0.0, 2.0));
        assert_eq!(mesh.face_count(), 3 * 8);
        assert!(mesh.validate_indices());
    }

    #[test]
    fn rejects_too_few_rings_or_points() {
        assert_eq!(
            build_tube(&[square(0.0)]).unwrap_err(),
            CurveError::TooFewRings { min: 2, actual: 1 }
        );
        assert_eq!(
            build_tube(&[square(0.0), vec![Point3::origin()]]).unwrap_err(),
            CurveError::TooFewPoints {
                ring: 1,
                min: 2,
                actual: 1
            }
        );
    }
}
