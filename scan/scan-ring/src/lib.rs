//! Per-slice contour preprocessing for rotational ultrasound reconstruction.
//!
//! Each acquisition angle yields an unordered set of 2D contour points in
//! image pixels. This crate turns every such set into a [`Ring`]: a fixed
//! number of points, ordered around the contour, evenly spaced, smoothed,
//! and balanced so the same number of points lies on each side of a
//! symmetry axis near the probe's center column.
//!
//! # Pipeline
//!
//! [`preprocess_ring`] runs these steps in order:
//!
//! 1. [`pad_to_length`] repeats the last point up to `num_points`
//! 2. [`is_degenerate`] drops empty or all-zero slices
//! 3. [`sort_by_polar_angle`] orders points around `(center_x, mean y)`
//! 4. [`resample_arc_length`] spaces `num_points` points along the contour
//! 5. [`smooth_circular`] applies a circular moving average
//! 6. [`find_symmetry_axis`] and [`balance_halves`] center the far pole
//! 7. [`resample_halves`] evens out spacing on each side
//!
//! [`RingSet`] applies this to every slice of an acquisition, keeping each
//! ring at its angle index.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point2;
//! use scan_ring::{RingParams, RingSet};
//!
//! let slice: Vec<Point2<f64>> = (0..30)
//!     .map(|i| {
//!         let a = f64::from(i) * 0.2;
//!         Point2::new(120.0 + 25.0 * a.cos(), 60.0 + 15.0 * a.sin())
//!     })
//!     .collect();
//!
//! let set = RingSet::from_slices(&vec![slice; 12], 12, &RingParams::default())?;
//! assert_eq!(set.len(), 12);
//! assert!(set.present().all(|(_, ring)| ring.len() == 49));
//! # Ok::<(), scan_ring::RingError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod balance;
mod error;
mod params;
mod preprocess;
mod resample;
mod ring;
mod ringset;
mod smooth;
mod sort;

pub use balance::{balance_halves, find_symmetry_axis};
pub use error::{RingError, RingResult};
pub use params::RingParams;
pub use preprocess::{is_degenerate, pad_to_length, preprocess_ring};
pub use resample::{resample_arc_length, resample_halves};
pub use ring::Ring;
pub use ringset::RingSet;
pub use smooth::smooth_circular;
pub use sort::sort_by_polar_angle;
