//! Pole normalization across a ring set.

// Ring counts are tiny
#![allow(clippy::cast_precision_loss)]

use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::error::{CurveError, CurveResult};

/// Minimum ring length: the middle pole and its two neighbours must not
/// reach the first pole's slots at `0` and `1`.
const MIN_RING_POINTS: usize = 4;

/// Force every ring to share the same two pole points.
///
/// The first point of each ring is averaged across all rings, and so is
/// the middle point (index `len / 2` of each ring). Every ring then has
/// indices `0`, `1` and `len − 1` overwritten with the averaged first pole,
/// followed by `mid − 1`, `mid` and `mid + 1` with the averaged middle
/// pole. On a four-point ring the middle pole wins the shared last slot.
///
/// # Errors
///
/// Returns [`CurveError::TooFewRings`] for an empty set and
/// [`CurveError::TooFewPoints`] for a ring shorter than four points. The
/// rings are untouched on error.
///
/// # Example
///
/// ```
/// use mesh_from_rings::normalize_poles;
/// use nalgebra::Point3;
///
/// let ring = |x: f64| vec![
///     Point3::new(x, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(2.0, 2.0, 0.0),
///     Point3::new(3.0, 3.0, 0.0),
///     Point3::new(4.0, 4.0, 0.0),
/// ];
/// let mut rings = vec![ring(0.0), ring(2.0)];
///
/// normalize_poles(&mut rings)?;
///
/// assert_eq!(rings[0][0], Point3::new(1.0, 0.0, 0.0));
/// assert_eq!(rings[1][4], Point3::new(1.0, 0.0, 0.0));
/// # Ok::<(), mesh_from_rings::CurveError>(())
/// ```
pub fn normalize_poles(rings: &mut [Vec<Point3<f64>>]) -> CurveResult<()> {
    if rings.is_empty() {
        return Err(CurveError::TooFewRings {
            min: 1,
            actual: 0,
        });
    }
    if let Some((ring, points)) = rings
        .iter()
        .enumerate()
        .find(|(_, points)| points.len() < MIN_RING_POINTS)
    {
        return Err(CurveError::TooFewPoints {
            ring,
            min: MIN_RING_POINTS,
            actual: points.len(),
        });
    }

    let count = rings.len() as f64;
    let (first_sum, middle_sum) = rings.iter().fold(
        (Vector3::zeros(), Vector3::zeros()),
        |(first, middle): (Vector3<f64>, Vector3<f64>), ring| {
            (first + ring[0].coords, middle + ring[ring.len() / 2].coords)
        },
    );
    let first = Point3::from(first_sum / count);
    let middle = Point3::from(middle_sum / count);

    for ring in rings.iter_mut() {
        let last = ring.len() - 1;
        let mid = ring.len() / 2;
        for i in [0, 1, last] {
            ring[i] = first;
        }
        for i in [mid - 1, mid, mid + 1] {
            ring[i] = middle;
        }
    }

    debug!(
        rings = rings.len(),
        first = ?first,
        middle = ?middle,
        "Normalized ring poles"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring(len: usize, shift: f64) -> Vec<Point3<f64>> {
        (0..len)
            .map(|i| Point3::new(i as f64 + shift, -(i as f64), shift * 2.0))
            .collect()
    }

    #[test]
    fn poles_are_shared() {
        let mut rings = vec![ring(9, 0.0), ring(9, 1.0), ring(9, 5.0)];
        normalize_poles(&mut rings).unwrap();

        let first = Point3::new(2.0, 0.0, 4.0);
        let middle = Point3::new(6.0, -4.0, 4.0);
        for r in &rings {
            for i in [0, 1, 8] {
                assert_relative_eq!(r[i], first, epsilon = 1e-12);
            }
            for i in [3, 4, 5] {
                assert_relative_eq!(r[i], middle, epsilon = 1e-12);
            }
            // Untouched slots keep their own values.
            assert_relative_eq!(r[2].y, -2.0);
            assert_relative_eq!(r[6].y, -6.0);
        }
    }

    #[test]
    fn each_ring_uses_its_own_middle() {
        let mut rings = vec![ring(6, 0.0), ring(8, 0.0)];
        normalize_poles(&mut rings).unwrap();

        // Middles are index 3 (x = 3) and index 4 (x = 4).
        let middle = Point3::new(3.5, -3.5, 0.0);
        assert_relative_eq!(rings[0][3], middle);
        assert_relative_eq!(rings[1][4], middle);
        assert_relative_eq!(rings[1][5], middle);
        assert_relative_eq!(rings[1][6].x, 6.0);
    }

    #[test]
    fn four_point_ring_middle_wins_last_slot() {
        let mut rings = vec![ring(4, 0.0)];
        normalize_poles(&mut rings).unwrap();

        assert_relative_eq!(rings[0][0], Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(rings[0][3], Point3::new(2.0, -2.0, 0.0));
        assert_relative_eq!(rings[0][1], Point3::new(2.0, -2.0, 0.0));
    }

    #[test]
    fn rejects_short_or_empty_input() {
        let mut empty: Vec<Vec<Point3<f64>>> = Vec::new();
        assert_eq!(
            normalize_poles(&mut empty),
            Err(CurveError::TooFewRings { min: 1, actual: 0 })
        );

        let mut rings = vec![ring(5, 0.0), ring(3, 0.0)];
        let before = rings.clone();
        assert_eq!(
            normalize_poles(&mut rings),
            Err(CurveError::TooFewPoints {
                ring: 1,
                min: 4,
                actual: 3
            })
        );
        assert_eq!(rings, before);
    }
}
