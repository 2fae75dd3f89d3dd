//! Per-vertex normal estimation.

use nalgebra::Vector3;
use tracing::{debug, warn};

use crate::{IndexedMesh, MeshTopology, VertexProperty};

impl IndexedMesh {
    /// Recompute per-vertex normals from the faces.
    ///
    /// Every vertex normal is reset to zero, the unit normal of each face is
    /// added to its three corners, and the sums are normalized. Faces whose
    /// cross product is exactly zero contribute nothing, so a vertex touched
    /// only by such faces (or by no face at all) keeps a zero normal. Faces
    /// that reference a missing vertex are skipped.
    ///
    /// Registers `nx`, `ny`, `nz` in the schema.
    pub fn update_normals(&mut self) {
        for vertex in &mut self.vertices {
            vertex.attributes.normal = Some(Vector3::zeros());
        }

        let mut degenerate = 0usize;
        let mut invalid = 0usize;

        for fi in 0..self.faces.len() {
            let Some(tri) = self.triangle(fi) else {
                invalid += 1;
                continue;
            };
            let Some(normal) = tri.unit_normal() else {
                degenerate += 1;
                continue;
            };
            for &vi in &self.faces[fi] {
                if let Some(acc) = self.vertices[vi as usize].attributes.normal.as_mut() {
                    *acc += normal;
                }
            }
        }

        for vertex in &mut self.vertices {
            if let Some(n) = vertex.attributes.normal.as_mut() {
                if let Some(unit) = n.try_normalize(0.0) {
                    *n = unit;
                }
            }
        }

        if invalid > 0 {
            warn!(invalid, "Skipped faces referencing missing vertices");
        }

        self.schema.register_all(VertexProperty::NORMAL);

        debug!(
            vertices = self.vertices.len(),
            faces = self.faces.len(),
            degenerate,
            "Updated vertex normals"
        );
    }

    /// Remove all vertex normals and unregister the normal columns.
    pub fn clear_normals(&mut self) {
        for vertex in &mut self.vertices {
            vertex.attributes.normal = None;
        }
        for property in VertexProperty::NORMAL {
            self.schema.unregister(property);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{IndexedMesh, Vertex, VertexProperty};
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn make_triangle() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.add_vertices([
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
        ]);
        mesh.add_face([0, 1, 2]);
        mesh
    }

    #[test]
    fn single_triangle_normals() {
        let mut mesh = make_triangle();
        mesh.update_normals();

        for v in &mesh.vertices {
            assert_eq!(v.normal(), Some(Vector3::new(0.0, 0.0, 1.0)));
        }
        assert!(mesh.schema().contains(VertexProperty::Nx));
        assert!(mesh.schema().contains(VertexProperty::Ny));
        assert!(mesh.schema().contains(VertexProperty::Nz));
    }

    #[test]
    fn folded_pair_averages() {
        let mut mesh = IndexedMesh::new();
        mesh.add_vertices([
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
            Vertex::from_coords(0.0, 0.0, 1.0),
        ]);
        // +z normal and -y normal.
        mesh.add_faces([[0, 1, 2], [0, 1, 3]]);
        mesh.update_normals();

        let shared = mesh.vertices[0].normal().unwrap_or_default();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(shared, Vector3::new(0.0, -h, h), epsilon = 1e-12);
        assert_relative_eq!(shared.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_face_contributes_nothing() {
        let mut mesh = make_triangle();
        mesh.add_vertices([
            Vertex::from_coords(2.0, 0.0, 0.0),
            Vertex::from_coords(3.0, 0.0, 0.0),
        ]);
        // Collinear with vertex 1: zero area.
        mesh.add_face([1, 3, 4]);
        mesh.update_normals();

        assert_eq!(mesh.vertices[1].normal(), Some(Vector3::new(0.0, 0.0, 1.0)));
        assert_eq!(mesh.vertices[3].normal(), Some(Vector3::zeros()));
        assert_eq!(mesh.vertices[4].normal(), Some(Vector3::zeros()));
    }

    #[test]
    fn invalid_face_is_skipped() {
        let mut mesh = make_triangle();
        mesh.add_face([0, 1, 7]);
        mesh.update_normals();
        assert_eq!(mesh.vertices[2].normal(), Some(Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn clear_normals_unregisters() {
        let mut mesh = make_triangle();
        mesh.update_normals();
        mesh.clear_normals();
        assert!(mesh.schema().is_empty());
        assert!(mesh.vertices.iter().all(|v| v.normal().is_none()));
    }
}
