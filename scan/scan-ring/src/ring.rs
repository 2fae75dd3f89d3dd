//! The canonical ring type.

use nalgebra::Point2;

/// One angular slice after preprocessing.
///
/// Points are ordered around the contour starting near the seam, with the
/// symmetry axis at [`middle_index`](Self::middle_index). Rings produced by
/// [`preprocess_ring`](crate::preprocess_ring) all have the configured
/// `num_points`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point2<f64>>,
}

impl Ring {
    /// Wrap already ordered points.
    #[must_use]
    pub const fn from_points(points: Vec<Point2<f64>>) -> Self {
        Self { points }
    }

    /// The ordered points.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the ring has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the far pole, `len / 2`.
    #[inline]
    #[must_use]
    pub fn middle_index(&self) -> usize {
        self.points.len() / 2
    }

    /// Take the points out of the ring.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2<f64>> {
        self.points
    }
}

impl AsRef<[Point2<f64>]> for Ring {
    fn as_ref(&self) -> &[Point2<f64>] {
        &self.points
    }
}
