//! Angular projection of image-plane rings into 3D.

use nalgebra::{Point2, Point3};

/// Calibration for placing slice pixels in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Image column of the rotation axis, in pixels.
    pub center_x: f64,
    /// Size of one pixel in world units (millimeters).
    pub pixel_spacing: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            center_x: 120.0,
            pixel_spacing: 0.04979,
        }
    }
}

impl ProjectionParams {
    /// Set the rotation axis column.
    #[must_use]
    pub const fn with_center_x(mut self, center_x: f64) -> Self {
        self.center_x = center_x;
        self
    }

    /// Set the pixel spacing.
    #[must_use]
    pub const fn with_pixel_spacing(mut self, pixel_spacing: f64) -> Self {
        self.pixel_spacing = pixel_spacing;
        self
    }
}

/// Place one image point in 3D for a slice at `angle_deg`.
///
/// The horizontal offset from the axis is swung around the vertical axis;
/// the image row becomes height.
#[inline]
#[must_use]
pub fn project_point(point: &Point2<f64>, angle_deg: f64, params: &ProjectionParams) -> Point3<f64> {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let offset = (point.x - params.center_x) * params.pixel_spacing;
    Point3::new(offset * cos, point.y * params.pixel_spacing, offset * sin)
}

/// Place a whole ring in 3D, keeping its point order.
///
/// # Example
///
/// ```
/// use mesh_from_rings::{project_ring, ProjectionParams};
/// use nalgebra::Point2;
///
/// let params = ProjectionParams::default().with_pixel_spacing(1.0);
/// let ring = project_ring(&[Point2::new(130.0, 5.0)], 90.0, &params);
///
/// assert!(ring[0].x.abs() < 1e-12);
/// assert!((ring[0].y - 5.0).abs() < 1e-12);
/// assert!((ring[0].z - 10.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn project_ring(
    points: &[Point2<f64>],
    angle_deg: f64,
    params: &ProjectionParams,
) -> Vec<Point3<f64>> {
    points
        .iter()
        .map(|p| project_point(p, angle_deg, params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_angle_lies_in_xy_plane() {
        let params = ProjectionParams::default();
        let p = project_point(&Point2::new(140.0, 50.0), 0.0, &params);

        assert_relative_eq!(p.x, 20.0 * 0.04979, epsilon = 1e-12);
        assert_relative_eq!(p.y, 50.0 * 0.04979, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn axis_points_do_not_move() {
        let params = ProjectionParams::default();
        for angle in [0.0, 15.0, 90.0, 165.0] {
            let p = project_point(&Point2::new(120.0, 10.0), angle, &params);
            assert_relative_eq!(p.x, 0.0);
            assert_relative_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn left_of_axis_swings_opposite() {
        let params = ProjectionParams::default()
            .with_center_x(0.0)
            .with_pixel_spacing(2.0);
        let p = project_point(&Point2::new(-1.0, 0.0), 45.0, &params);
        let h = std::f64::consts::SQRT_2;

        assert_relative_eq!(p.x, -h, epsilon = 1e-12);
        assert_relative_eq!(p.z, -h, epsilon = 1e-12);
    }

    #[test]
    fn ring_keeps_order() {
        let params = ProjectionParams::default().with_pixel_spacing(1.0);
        let ring = project_ring(
            &[Point2::new(121.0, 0.0), Point2::new(122.0, 1.0), Point2::new(123.0, 2.0)],
            0.0,
            &params,
        );
        let xs: Vec<f64> = ring.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }
}
