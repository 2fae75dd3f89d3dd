//! Ring preprocessing parameters.

use crate::error::{RingError, RingResult};

/// Tuning for the ring preprocessor.
///
/// Defaults match a 240-pixel-wide probe image with the rotation axis in
/// the middle column.
#[derive(Debug, Clone, PartialEq)]
pub struct RingParams {
    /// Number of points in every produced ring.
    pub num_points: usize,

    /// Image column used as the x of the polar-sort center.
    ///
    /// The y of the center is always the mean y of the ring.
    pub center_x: f64,

    /// Image column the symmetry axis is snapped to.
    pub landmark_x: f64,

    /// How far either side of the middle index to look for the axis.
    pub landmark_window: usize,

    /// Width of the circular moving average (odd).
    pub smoothing_window: usize,

    /// Number of smoothing passes.
    pub smoothing_iterations: usize,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            num_points: 49,
            center_x: 120.0,
            landmark_x: 120.0,
            landmark_window: 8,
            smoothing_window: 5,
            smoothing_iterations: 1,
        }
    }
}

impl RingParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of points per ring.
    #[must_use]
    pub const fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Set the polar-sort center column.
    #[must_use]
    pub const fn with_center_x(mut self, center_x: f64) -> Self {
        self.center_x = center_x;
        self
    }

    /// Set the landmark column for the symmetry axis.
    #[must_use]
    pub const fn with_landmark_x(mut self, landmark_x: f64) -> Self {
        self.landmark_x = landmark_x;
        self
    }

    /// Set the symmetry-axis search half-width.
    #[must_use]
    pub const fn with_landmark_window(mut self, window: usize) -> Self {
        self.landmark_window = window;
        self
    }

    /// Set the smoothing window width.
    #[must_use]
    pub const fn with_smoothing_window(mut self, window: usize) -> Self {
        self.smoothing_window = window;
        self
    }

    /// Set the number of smoothing passes.
    #[must_use]
    pub const fn with_smoothing_iterations(mut self, iterations: usize) -> Self {
        self.smoothing_iterations = iterations;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidParams`] if:
    /// - `num_points` is below 4 (poles need a first, middle and two neighbours)
    /// - `smoothing_window` is zero or even
    /// - `center_x` or `landmark_x` is not finite
    pub fn validate(&self) -> RingResult<()> {
        if self.num_points < 4 {
            return Err(RingError::invalid_params(format!(
                "num_points must be at least 4, got {}",
                self.num_points
            )));
        }
        if self.smoothing_window == 0 || self.smoothing_window % 2 == 0 {
            return Err(RingError::invalid_params(format!(
                "smoothing_window must be odd, got {}",
                self.smoothing_window
            )));
        }
        if !self.center_x.is_finite() || !self.landmark_x.is_finite() {
            return Err(RingError::invalid_params(
                "center_x and landmark_x must be finite",
            ));
        }
        Ok(())
    }
}
