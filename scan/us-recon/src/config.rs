//! Reconstruction configuration.

use mesh_from_rings::ProjectionParams;
use mesh_subdivide::SubdivideParams;
use scan_io::DEFAULT_MAX_CONTOUR_POINTS;
use scan_ring::RingParams;

use crate::error::{ReconError, ReconResult};

/// Everything that tunes one reconstruction.
///
/// Defaults describe a 12-slice acquisition at 15° steps from a 240-pixel
/// wide probe image. The rotation axis column `center_x` is shared by ring
/// preprocessing and projection; [`ring_params`](Self::ring_params) and
/// [`projection`](Self::projection) derive both from it.
///
/// # Example
///
/// ```
/// use us_recon::ReconConfig;
///
/// let config = ReconConfig::default()
///     .with_center_x(128.0)
///     .with_subdivide(false);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.ring_params().center_x, 128.0);
/// assert_eq!(config.projection().center_x, 128.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReconConfig {
    /// Number of angular slices in one acquisition.
    pub num_images: usize,

    /// Angle between consecutive slices, in degrees.
    pub angle_step_deg: f64,

    /// Image column of the rotation axis, in pixels.
    pub center_x: f64,

    /// Image column the symmetry axis is snapped to.
    pub landmark_x: f64,

    /// Size of one pixel in world units.
    pub pixel_spacing: f64,

    /// Points per ring.
    pub num_points: usize,

    /// Symmetry-axis search half-width.
    pub landmark_window: usize,

    /// Circular smoothing window (odd).
    pub smoothing_window: usize,

    /// Circular smoothing passes.
    pub smoothing_iterations: usize,

    /// Contour points taken from each bitmap slice.
    pub max_contour_points: usize,

    /// Run Loop subdivision on the stitched tube.
    pub subdivide: bool,

    /// Subdivision settings, used when `subdivide` is set.
    pub subdivision: SubdivideParams,

    /// Compute per-vertex normals on the final mesh.
    pub update_normals: bool,
}

impl Default for ReconConfig {
    fn default() -> Self {
        let ring = RingParams::default();
        let projection = ProjectionParams::default();
        Self {
            num_images: 12,
            angle_step_deg: 15.0,
            center_x: projection.center_x,
            landmark_x: ring.landmark_x,
            pixel_spacing: projection.pixel_spacing,
            num_points: ring.num_points,
            landmark_window: ring.landmark_window,
            smoothing_window: ring.smoothing_window,
            smoothing_iterations: ring.smoothing_iterations,
            max_contour_points: DEFAULT_MAX_CONTOUR_POINTS,
            subdivide: true,
            subdivision: SubdivideParams::default(),
            update_normals: true,
        }
    }
}

impl ReconConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of slices.
    #[must_use]
    pub const fn with_num_images(mut self, num_images: usize) -> Self {
        self.num_images = num_images;
        self
    }

    /// Set the angle between slices.
    #[must_use]
    pub const fn with_angle_step(mut self, degrees: f64) -> Self {
        self.angle_step_deg = degrees;
        self
    }

    /// Set the rotation axis column.
    #[must_use]
    pub const fn with_center_x(mut self, center_x: f64) -> Self {
        self.center_x = center_x;
        self
    }

    /// Set the symmetry landmark column.
    #[must_use]
    pub const fn with_landmark_x(mut self, landmark_x: f64) -> Self {
        self.landmark_x = landmark_x;
        self
    }

    /// Set the pixel spacing.
    #[must_use]
    pub const fn with_pixel_spacing(mut self, pixel_spacing: f64) -> Self {
        self.pixel_spacing = pixel_spacing;
        self
    }

    /// Set the number of points per ring.
    #[must_use]
    pub const fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Enable or disable subdivision.
    #[must_use]
    pub const fn with_subdivide(mut self, subdivide: bool) -> Self {
        self.subdivide = subdivide;
        self
    }

    /// Set the subdivision parameters.
    #[must_use]
    pub const fn with_subdivision(mut self, subdivision: SubdivideParams) -> Self {
        self.subdivision = subdivision;
        self
    }

    /// Enable or disable normal computation.
    #[must_use]
    pub const fn with_update_normals(mut self, update_normals: bool) -> Self {
        self.update_normals = update_normals;
        self
    }

    /// Ring preprocessing parameters derived from this configuration.
    #[must_use]
    pub fn ring_params(&self) -> RingParams {
        RingParams::new()
            .with_num_points(self.num_points)
            .with_center_x(self.center_x)
            .with_landmark_x(self.landmark_x)
            .with_landmark_window(self.landmark_window)
            .with_smoothing_window(self.smoothing_window)
            .with_smoothing_iterations(self.smoothing_iterations)
    }

    /// Projection parameters derived from this configuration.
    #[must_use]
    pub fn projection(&self) -> ProjectionParams {
        ProjectionParams::default()
            .with_center_x(self.center_x)
            .with_pixel_spacing(self.pixel_spacing)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReconError::InvalidConfig`] if:
    /// - `num_images` is below 2
    /// - `angle_step_deg` or `pixel_spacing` is not finite and positive
    /// - the derived ring parameters are invalid
    /// - subdivision is enabled with zero iterations
    pub fn validate(&self) -> ReconResult<()> {
        if self.num_images < 2 {
            return Err(ReconError::invalid_config(format!(
                "num_images must be at least 2, got {}",
                self.num_images
            )));
        }
        if !(self.angle_step_deg.is_finite() && self.angle_step_deg > 0.0) {
            return Err(ReconError::invalid_config(format!(
                "angle_step_deg must be positive, got {}",
                self.angle_step_deg
            )));
        }
        if !(self.pixel_spacing.is_finite() && self.pixel_spacing > 0.0) {
            return Err(ReconError::invalid_config(format!(
                "pixel_spacing must be positive, got {}",
                self.pixel_spacing
            )));
        }
        self.ring_params()
            .validate()
            .map_err(|e| ReconError::invalid_config(e.to_string()))?;
        if self.subdivide && self.subdivision.iterations == 0 {
            return Err(ReconError::invalid_config(
                "subdivision enabled with zero iterations",
            ));
        }
        Ok(())
    }
}
