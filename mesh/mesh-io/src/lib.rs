//! PLY serialization for reconstructed meshes.
//!
//! Meshes are written with float positions, one float column per attribute
//! registered in the mesh's [`AttributeSchema`](mesh_types::AttributeSchema)
//! (in schema order), and triangle faces as `list uchar int vertex_indices`.
//! Both ASCII and binary little-endian output are supported.
//!
//! The reader accepts any PLY encoding, restores the recognized attribute
//! columns (`red`, `green`, `blue`, `nx`, `ny`, `nz`) and re-registers them
//! on the loaded mesh.
//!
//! # Example
//!
//! ```
//! use mesh_io::{read_ply, write_ply};
//! use mesh_types::{IndexedMesh, MeshTopology, Vertex, VertexProperty};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.add_vertices([
//!     Vertex::from_coords(0.0, 0.0, 0.0),
//!     Vertex::from_coords(1.0, 0.0, 0.0),
//!     Vertex::from_coords(0.0, 1.0, 0.0),
//! ]);
//! mesh.add_face([0, 1, 2]);
//! mesh.update_normals();
//!
//! let mut bytes = Vec::new();
//! write_ply(&mesh, &mut bytes, false)?;
//!
//! let loaded = read_ply(bytes.as_slice())?;
//! assert_eq!(loaded.face_count(), 1);
//! assert!(loaded.schema().contains(VertexProperty::Nz));
//! # Ok::<(), mesh_io::IoError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod ply;

pub use error::{IoError, IoResult};
pub use ply::{load_ply, read_ply, save_ply, write_ply};
