//! Turn angular cross-section rings into a closed triangle mesh.
//!
//! Each ring is an ordered 2D contour taken from a slice rotated about a
//! common vertical axis. This crate covers the three geometric steps that
//! take those rings to a mesh:
//!
//! - **Projection**: place a 2D ring in 3D by rotating it about the image
//!   column `center_x` by the slice angle ([`project_ring`])
//! - **Pole normalization**: collapse the top and bottom poles of every
//!   ring onto a single shared point each ([`normalize_poles`])
//! - **Tube stitching**: triangulate consecutive rings and wrap the last
//!   ring back onto the first ([`build_tube`])
//!
//! # Quick Start
//!
//! ```
//! use mesh_from_rings::{build_tube, project_ring, ProjectionParams};
//! use mesh_types::MeshTopology;
//! use nalgebra::Point2;
//!
//! let contour = vec![
//!     Point2::new(130.0, 10.0),
//!     Point2::new(140.0, 20.0),
//!     Point2::new(130.0, 30.0),
//!     Point2::new(120.0, 20.0),
//! ];
//! let params = ProjectionParams::default();
//!
//! let rings: Vec<_> = (0..3)
//!     .map(|i| project_ring(&contour, f64::from(i) * 60.0, &params))
//!     .collect();
//!
//! let mesh = build_tube(&rings)?;
//! assert_eq!(mesh.vertex_count(), 12);
//! assert!(mesh.is_closed());
//! # Ok::<(), mesh_from_rings::CurveError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod poles;
mod projection;
mod tube;

pub use error::{CurveError, CurveResult};
pub use poles::normalize_poles;
pub use projection::{ProjectionParams, project_point, project_ring};
pub use tube::build_tube;
