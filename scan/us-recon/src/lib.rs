//! Rotational ultrasound surface reconstruction.
//!
//! A probe rotating about a vertical axis captures one cross-section every
//! few degrees. Each cross-section yields a 2D contour; this crate turns the
//! set of contours into one closed, smooth triangle mesh.
//!
//! # Quick Start
//!
//! ```no_run
//! use us_recon::prelude::*;
//!
//! let slices = us_recon::scan_io::load_point_log("BDX.BIN", "BDY.BIN", &PointLogLayout::default())?;
//! let recon = reconstruct(&slices, &ReconConfig::default())?;
//!
//! println!("{recon}");
//! save_ply(&recon.mesh, "surface.ply", true)?;
//! # Ok::<(), us_recon::ReconError>(())
//! ```
//!
//! # Stages
//!
//! - [`ring`]: order, resample, smooth and balance each slice's contour
//! - [`from_rings`]: project rings into 3D, merge poles, stitch a tube
//! - [`subdivide`]: Loop subdivision
//! - [`types`]: the mesh container and vertex normals
//! - [`io`]: PLY output
//! - [`scan_io`]: bitmap and point-log slice sources

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod config;
mod error;
mod pipeline;

pub use config::ReconConfig;
pub use error::{ReconError, ReconResult};
pub use pipeline::{Reconstruction, reconstruct, reconstruct_images, reconstruct_point_log};

// =============================================================================
// Re-exports
// =============================================================================

/// Mesh container, vertex attributes, normals.
pub use mesh_types as types;

/// PLY reading and writing.
pub use mesh_io as io;

/// Loop subdivision.
pub use mesh_subdivide as subdivide;

/// Projection, pole normalization, tube stitching.
pub use mesh_from_rings as from_rings;

/// Per-slice ring preprocessing.
pub use scan_ring as ring;

/// Bitmap and point-log slice sources.
pub use scan_io;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for reconstruction.
///
/// # Usage
///
/// ```
/// use us_recon::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ReconConfig, ReconError, Reconstruction, reconstruct};

    pub use mesh_io::{load_ply, save_ply};
    pub use mesh_types::{IndexedMesh, MeshTopology, VertexProperty};
    pub use scan_io::{ImageStack, PointLogLayout};
    pub use scan_ring::{Ring, RingParams};
}
