//! The full per-slice preprocessing chain.

use nalgebra::Point2;
use tracing::debug;

use crate::balance::{balance_halves, find_symmetry_axis};
use crate::error::RingResult;
use crate::params::RingParams;
use crate::resample::{resample_arc_length, resample_halves};
use crate::ring::Ring;
use crate::smooth::smooth_circular;
use crate::sort::sort_by_polar_angle;

/// Pad `points` up to `len` by repeating the last point.
///
/// Empty input stays empty; longer input is left alone.
pub fn pad_to_length(points: &mut Vec<Point2<f64>>, len: usize) {
    if let Some(&last) = points.last() {
        if points.len() < len {
            points.resize(len, last);
        }
    }
}

/// A slice is degenerate when it has no points or every point is `(0, 0)`.
#[must_use]
pub fn is_degenerate(points: &[Point2<f64>]) -> bool {
    points.iter().all(|p| p.x == 0.0 && p.y == 0.0)
}

/// Turn one slice's raw contour points into a canonical [`Ring`].
///
/// Steps, in order: pad to `num_points`, reject degenerate slices, polar
/// sort, arc-length resample to `num_points`, circular smoothing, symmetry
/// axis balancing, and per-half resampling.
///
/// Returns `Ok(None)` for a degenerate slice so the caller can skip its
/// angle.
///
/// # Errors
///
/// Returns an error if `params` fails validation.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use scan_ring::{RingParams, preprocess_ring};
///
/// let raw: Vec<Point2<f64>> = (0..40)
///     .map(|i| {
///         let a = f64::from(i) * 0.157;
///         Point2::new(120.0 + 30.0 * a.cos(), 80.0 + 20.0 * a.sin())
///     })
///     .collect();
///
/// let ring = preprocess_ring(raw, &RingParams::default())?.expect("not degenerate");
/// assert_eq!(ring.len(), 49);
///
/// assert!(preprocess_ring(vec![Point2::origin(); 5], &RingParams::default())?.is_none());
/// # Ok::<(), scan_ring::RingError>(())
/// ```
pub fn preprocess_ring(mut points: Vec<Point2<f64>>, params: &RingParams) -> RingResult<Option<Ring>> {
    params.validate()?;

    let raw_len = points.len();
    pad_to_length(&mut points, params.num_points);
    if is_degenerate(&points) {
        debug!(raw_len, "Degenerate slice, no ring produced");
        return Ok(None);
    }

    sort_by_polar_angle(&mut points, params.center_x);
    let points = resample_arc_length(&points, params.num_points);
    let points = smooth_circular(
        &points,
        params.smoothing_window,
        params.smoothing_iterations,
    );

    let points = match find_symmetry_axis(&points, params.landmark_x, params.landmark_window) {
        Some(axis) => {
            let (balanced, new_axis) = balance_halves(&points, axis);
            debug!(axis, new_axis, "Balanced ring halves");
            balanced
        }
        None => points,
    };
    let points = resample_halves(&points);

    debug!(raw_len, points = points.len(), "Preprocessed ring");

    Ok(Some(Ring::from_points(points)))
}
