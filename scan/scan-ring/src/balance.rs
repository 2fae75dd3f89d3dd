//! Symmetry-axis search and half balancing.

use nalgebra::Point2;

/// Find the point nearest to `landmark_x` within `window` positions of the
/// ring's middle index.
///
/// The candidate range is `[max(1, mid − window), min(len − 1, mid + window))`
/// with `mid = len / 2`, so the chosen axis always has a neighbour on each
/// side. Ties go to the lowest index. Returns `None` when the range is empty
/// (rings shorter than three points).
#[must_use]
pub fn find_symmetry_axis(points: &[Point2<f64>], landmark_x: f64, window: usize) -> Option<usize> {
    let mid = points.len() / 2;
    let start = mid.saturating_sub(window).max(1);
    let end = (mid + window).min(points.len().saturating_sub(1));

    (start..end).fold(None, |best: Option<(usize, f64)>, i| {
        let d = (points[i].x - landmark_x).abs();
        match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((i, d)),
        }
    })
    .map(|(i, _)| i)
}

/// Rebalance a ring so the axis point has as many points on its left as on
/// its right, keeping the total count.
///
/// The shorter side grows by repeating its neighbour of the axis and the
/// longer side loses the points adjacent to the axis. With `k` the number of
/// moves needed (`⌈|left − right| / 2⌉`):
///
/// - left short: `k` copies of `points[axis − 1]` are inserted before the
///   axis and `points[axis + 1 ..= axis + k]` are removed;
/// - right short: `points[axis − k .. axis]` are removed and `k` copies of
///   `points[axis + 1]` are inserted after the axis.
///
/// Returns the new points and the new axis index. An axis without a
/// neighbour on both sides leaves the ring unchanged.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use scan_ring::balance_halves;
///
/// let ring: Vec<Point2<f64>> = (0..7).map(|i| Point2::new(f64::from(i), 0.0)).collect();
/// let (balanced, axis) = balance_halves(&ring, 1);
///
/// let xs: Vec<f64> = balanced.iter().map(|p| p.x).collect();
/// assert_eq!(xs, vec![0.0, 0.0, 0.0, 1.0, 4.0, 5.0, 6.0]);
/// assert_eq!(axis, 3);
/// ```
#[must_use]
pub fn balance_halves(points: &[Point2<f64>], axis: usize) -> (Vec<Point2<f64>>, usize) {
    if axis == 0 || axis + 1 >= points.len() {
        return (points.to_vec(), axis);
    }

    let left = axis;
    let right = points.len() - axis - 1;
    let mut out = Vec::with_capacity(points.len());

    if left < right {
        let k = (right - left).div_ceil(2);
        out.extend_from_slice(&points[..axis]);
        out.extend(std::iter::repeat_n(points[axis - 1], k));
        out.push(points[axis]);
        out.extend_from_slice(&points[axis + 1 + k..]);
        (out, axis + k)
    } else if right < left {
        let k = (left - right).div_ceil(2);
        out.extend_from_slice(&points[..axis - k]);
        out.push(points[axis]);
        out.extend(std::iter::repeat_n(points[axis + 1], k));
        out.extend_from_slice(&points[axis + 1..]);
        (out, axis - k)
    } else {
        (points.to_vec(), axis)
    }
}
