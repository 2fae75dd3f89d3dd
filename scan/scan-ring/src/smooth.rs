//! Circular moving-average smoothing.

// Window sizes are tiny
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use nalgebra::{Point2, Vector2};

/// Smooth a closed ring with a circular moving average.
///
/// Each pass replaces point `i` with the mean of points `i − w/2 ..= i + w/2`
/// (indices modulo the ring length). Points are updated in place, so each
/// window already sees the new values of the points before it, including the
/// wrapped-around ones at the end of the ring. `window` should be odd; an even
/// width is treated as the next odd width below it.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use scan_ring::smooth_circular;
///
/// let ring = [
///     Point2::new(0.0, 0.0),
///     Point2::new(3.0, 0.0),
///     Point2::new(0.0, 3.0),
/// ];
/// let smoothed = smooth_circular(&ring, 3, 1);
///
/// // The first point becomes the centroid; later windows reuse it.
/// assert!((smoothed[0].x - 1.0).abs() < 1e-12 && (smoothed[0].y - 1.0).abs() < 1e-12);
/// assert!((smoothed[1].x - 4.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn smooth_circular(points: &[Point2<f64>], window: usize, iterations: usize) -> Vec<Point2<f64>> {
    let n = points.len();
    let half = window / 2;
    if n == 0 || half == 0 {
        return points.to_vec();
    }

    let width = (2 * half + 1) as f64;
    let mut current = points.to_vec();

    for _ in 0..iterations {
        for i in 0..n {
            let sum: Vector2<f64> = (-(half as isize)..=half as isize)
                .map(|offset| {
                    let j = (i as isize + offset).rem_euclid(n as isize);
                    current[j as usize].coords
                })
                .sum();
            current[i] = Point2::from(sum / width);
        }
    }

    current
}
