//! Core mesh types for surface reconstruction.
//!
//! This crate provides the foundational types shared by every stage of the
//! reconstruction pipeline:
//!
//! - [`Vertex`] - A point in 3D space with optional typed attributes
//! - [`VertexProperty`] / [`AttributeSchema`] - Named per-vertex float columns
//! - [`Edge`] - A canonical (direction-independent) vertex pair
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//!
//! # Units
//!
//! All coordinates are `f64`. Meshes produced by the reconstruction pipeline
//! are in millimeters (pixel coordinates scaled by the pixel spacing).
//!
//! # Arena Model
//!
//! Vertices and faces live in contiguous arrays and reference each other by
//! `u32` index only. Adjacency (neighbors, incident faces, edges) is derived
//! on demand and never stored inside the mesh.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshTopology, Vertex, VertexProperty};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.add_vertices([
//!     Vertex::from_coords(0.0, 0.0, 0.0),
//!     Vertex::from_coords(1.0, 0.0, 0.0),
//!     Vertex::from_coords(0.0, 1.0, 0.0),
//! ]);
//! mesh.add_face([0, 1, 2]);
//!
//! mesh.update_normals();
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(mesh.schema().contains(VertexProperty::Nz));
//! assert_eq!(mesh.vertices[0].attribute(VertexProperty::Nz), Some(1.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod attributes;
mod edge;
mod mesh;
mod normals;
mod traits;
mod triangle;
mod vertex;

pub use attributes::{AttributeSchema, VertexProperty};
pub use edge::Edge;
pub use mesh::IndexedMesh;
pub use traits::MeshTopology;
pub use triangle::Triangle;
pub use vertex::{Vertex, VertexAttributes, VertexColor};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
