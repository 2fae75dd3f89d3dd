//! Loop subdivision for triangle meshes.
//!
//! One pass splits every triangle into four and smooths the result:
//!
//! - Each undirected edge gets exactly one new vertex, shared by both faces
//!   that use it. Interior edges are placed with the 3/8–1/8 Loop rule;
//!   boundary and non-manifold edges at their midpoint.
//! - Each original vertex with at least three neighbors is moved toward
//!   its neighbors with the valence-dependent Loop weight `β`.
//!
//! For a mesh with `V` vertices, `F` faces and `E` unique edges, one pass
//! yields `V + E` vertices and `4F` faces. The input mesh is never modified.
//!
//! # Examples
//!
//! ```
//! use mesh_types::{IndexedMesh, Vertex};
//! use mesh_subdivide::{subdivide_mesh, SubdivideParams};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.add_vertices([
//!     Vertex::from_coords(0.0, 0.0, 0.0),
//!     Vertex::from_coords(1.0, 0.0, 0.0),
//!     Vertex::from_coords(0.5, 1.0, 0.0),
//! ]);
//! mesh.add_face([0, 1, 2]);
//!
//! let result = subdivide_mesh(&mesh, &SubdivideParams::new().with_iterations(2))?;
//!
//! // 1 * 4^2 = 16 faces after 2 iterations
//! assert_eq!(result.final_faces, 16);
//! # Ok::<(), mesh_subdivide::SubdivideError>(())
//! ```
//!
//! A single unchecked pass is also available as a method:
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshTopology, Vertex};
//! use mesh_subdivide::LoopSubdivide;
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.add_vertices([
//!     Vertex::from_coords(0.0, 0.0, 0.0),
//!     Vertex::from_coords(1.0, 0.0, 0.0),
//!     Vertex::from_coords(0.0, 1.0, 0.0),
//! ]);
//! mesh.add_face([0, 1, 2]);
//!
//! let finer = mesh.loop_subdivided();
//! assert_eq!(finer.vertex_count(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod params;
mod result;
mod subdivide;

pub use error::{SubdivideError, SubdivideResult};
pub use params::SubdivideParams;
pub use result::SubdivisionResult;
pub use subdivide::{LoopSubdivide, loop_beta, subdivide_mesh, subdivide_once};
