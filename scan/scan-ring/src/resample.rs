//! Arc-length resampling.

// Point counts are tiny
#![allow(clippy::cast_precision_loss)]

use nalgebra::{Point2, distance};

/// Resample an ordered polyline to `count` points evenly spaced by arc length.
///
/// Cumulative chord lengths are measured along the open polyline from the
/// first point to the last. Output `i` sits at `total · i / (count − 1)`:
/// the first output is the first input, a target at or past the total
/// length is the last input, and anything between is interpolated on the
/// segment that brackets it. Coincident points add no length and are never
/// divided by.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use scan_ring::resample_arc_length;
///
/// let line = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(4.0, 0.0)];
/// let even = resample_arc_length(&line, 5);
///
/// let xs: Vec<f64> = even.iter().map(|p| p.x).collect();
/// assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
#[must_use]
pub fn resample_arc_length(points: &[Point2<f64>], count: usize) -> Vec<Point2<f64>> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    if count < 2 {
        return vec![first; count];
    }

    let cumulative: Vec<f64> = std::iter::once(0.0)
        .chain(points.windows(2).scan(0.0, |total, pair| {
            *total += distance(&pair[0], &pair[1]);
            Some(*total)
        }))
        .collect();
    let total = cumulative[cumulative.len() - 1];

    (0..count)
        .map(|i| {
            let target = total * i as f64 / (count - 1) as f64;
            if target <= 0.0 {
                return first;
            }
            if i + 1 == count || target >= total {
                return last;
            }
            // First cumulative length >= target; always in 1..len here.
            let upper = cumulative.partition_point(|&d| d < target);
            let lower = upper - 1;
            let t = (target - cumulative[lower]) / (cumulative[upper] - cumulative[lower]);
            points[lower] + (points[upper] - points[lower]) * t
        })
        .collect()
}

/// Resample each half of a ring independently, keeping its length.
///
/// The ring is split at `len / 2`; the left half is `[0, mid)` and the right
/// half `[mid, len)`, each resampled to its own point count.
#[must_use]
pub fn resample_halves(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mid = points.len() / 2;
    let (left, right) = points.split_at(mid);
    let mut out = resample_arc_length(left, left.len());
    out.extend(resample_arc_length(right, right.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn regular_polygon(n: usize) -> Vec<Point2<f64>> {
        (0..n)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / n as f64;
                Point2::new(50.0 * a.cos() + 120.0, 50.0 * a.sin() + 100.0)
            })
            .collect()
    }

    #[test]
    fn uniform_ring_is_reproduced() {
        let ring = regular_polygon(49);
        let out = resample_arc_length(&ring, 49);
        for (a, b) in ring.iter().zip(&out) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn duplicate_points_are_tolerated() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let out = resample_arc_length(&points, 5);
        let xs: Vec<f64> = out.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn coincident_points_stay_put() {
        let points = vec![Point2::new(3.0, 4.0); 6];
        let out = resample_arc_length(&points, 4);
        assert_eq!(out, vec![Point2::new(3.0, 4.0); 4]);
    }

    #[test]
    fn degenerate_counts() {
        let points = [Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)];
        assert!(resample_arc_length(&[], 5).is_empty());
        assert!(resample_arc_length(&points, 0).is_empty());
        assert_eq!(resample_arc_length(&points, 1), vec![Point2::new(1.0, 1.0)]);
    }

    #[test]
    fn halves_keep_their_split() {
        let points: Vec<Point2<f64>> = [0.0, 1.0, 5.0, 6.0, 7.0, 10.0]
            .iter()
            .map(|&x| Point2::new(x, 0.0))
            .collect();
        let out = resample_halves(&points);
        let xs: Vec<f64> = out.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.5, 5.0, 6.0, 8.0, 10.0]);
    }

    proptest! {
        #[test]
        fn length_and_endpoints(
            coords in proptest::collection::vec((-200.0f64..200.0, -200.0f64..200.0), 1..60),
            count in 2usize..80,
        ) {
            let points: Vec<Point2<f64>> = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
            let out = resample_arc_length(&points, count);

            prop_assert_eq!(out.len(), count);
            prop_assert_eq!(out[0], points[0]);
            prop_assert_eq!(out[count - 1], points[points.len() - 1]);
            prop_assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
}
