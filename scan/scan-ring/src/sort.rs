//! Polar ordering of raw contour points.

use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Point2;

/// Sort angle of `p` around `center`: `atan2(dy, dx) + π/2` in `[0, 2π)`.
fn sort_angle(p: &Point2<f64>, center: &Point2<f64>) -> f64 {
    let angle = (p.y - center.y).atan2(p.x - center.x) + FRAC_PI_2;
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Order points by descending polar angle and rotate the seam.
///
/// The center is `(center_x, mean y)`; its x is the fixed image column, not
/// the mean x of the points. Equal angles keep their input order. If the
/// first point is then farther from `center_x` (in x) than the last, the
/// last point is moved to the front.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use scan_ring::sort_by_polar_angle;
///
/// let mut points = vec![
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.0, -1.0),
/// ];
/// sort_by_polar_angle(&mut points, 0.0);
///
/// assert_eq!(points, vec![
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, -1.0),
/// ]);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn sort_by_polar_angle(points: &mut [Point2<f64>], center_x: f64) {
    if points.len() < 2 {
        return;
    }

    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / points.len() as f64;
    let center = Point2::new(center_x, mean_y);

    let mut keyed: Vec<(f64, Point2<f64>)> = points
        .iter()
        .map(|p| (sort_angle(p, &center), *p))
        .collect();
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    for (slot, (_, p)) in points.iter_mut().zip(keyed) {
        *slot = p;
    }

    let first = points[0].x - center_x;
    let last = points[points.len() - 1].x - center_x;
    if first.abs() > last.abs() {
        points.rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_triangle_order() {
        // Angles: (0,1) → π, (1,0) → π/2, (0,-1) → 0.
        let mut points = vec![
            Point2::new(0.0, -1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        sort_by_polar_angle(&mut points, 0.0);
        assert_eq!(
            points,
            vec![Point2::new(0.0, 1.0), Point2::new(1.0, 0.0), Point2::new(0.0, -1.0)]
        );
    }

    #[test]
    fn negative_angles_wrap_to_top() {
        // (-1, -1) has atan2 = -3π/4, +π/2 = -π/4 → 7π/4, the largest key.
        let mut points = vec![
            Point2::new(1.0, 1.0),
            Point2::new(-1.0, -1.0),
            Point2::new(-1.0, 1.0),
            Point2::new(1.0, -1.0),
        ];
        sort_by_polar_angle(&mut points, 0.0);
        assert_eq!(points[0], Point2::new(-1.0, -1.0));
        assert_eq!(points[1], Point2::new(-1.0, 1.0));
        assert_eq!(points[2], Point2::new(1.0, 1.0));
        assert_eq!(points[3], Point2::new(1.0, -1.0));
    }

    #[test]
    fn seam_rotates_when_first_is_farther() {
        // Sorted: (1,1) [3π/4], (3,0) [π/2], (0.5,-1) [~0.46]; |1| > |0.5|.
        let mut points = vec![
            Point2::new(3.0, 0.0),
            Point2::new(0.5, -1.0),
            Point2::new(1.0, 1.0),
        ];
        sort_by_polar_angle(&mut points, 0.0);
        assert_eq!(
            points,
            vec![Point2::new(0.5, -1.0), Point2::new(1.0, 1.0), Point2::new(3.0, 0.0)]
        );
    }

    #[test]
    fn center_x_is_fixed_not_mean() {
        // Mean x is 10, but the center column is 0: every point is to the right.
        let mut points = vec![
            Point2::new(10.0, -1.0),
            Point2::new(10.0, 1.0),
            Point2::new(10.0, 0.0),
        ];
        sort_by_polar_angle(&mut points, 0.0);
        assert_eq!(points[0], Point2::new(10.0, 1.0));
        assert_eq!(points[2], Point2::new(10.0, -1.0));
    }

    #[test]
    fn short_input_unchanged() {
        let mut points = vec![Point2::new(4.0, 2.0)];
        sort_by_polar_angle(&mut points, 0.0);
        assert_eq!(points, vec![Point2::new(4.0, 2.0)]);
    }
}
