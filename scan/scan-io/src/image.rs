//! Grayscale slice images and contour extraction.

// Image dimensions stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use nalgebra::Point2;
use tracing::debug;

use crate::error::{ScanIoError, ScanIoResult};

/// Pixel value that marks a detected contour sample.
pub const CONTOUR_VALUE: u8 = 255;

/// Default cap on contour points taken from one image.
pub const DEFAULT_MAX_CONTOUR_POINTS: usize = 50;

/// An owned 8-bit grayscale image, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl GrayImage {
    /// Wrap a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ScanIoError::Truncated`] if `pixels` is not exactly
    /// `width * height` bytes.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> ScanIoResult<Self> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(ScanIoError::Truncated {
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap a buffer the caller has already sized to `width * height`.
    pub(crate) fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// An image with every pixel set to `value`.
    #[must_use]
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width * height],
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`, or `None` outside the image.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Set the pixel at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanIoError::IndexOutOfRange`] outside the image.
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> ScanIoResult<()> {
        if x >= self.width || y >= self.height {
            return Err(ScanIoError::IndexOutOfRange {
                index: y.saturating_mul(self.width).saturating_add(x),
                len: self.pixels.len(),
            });
        }
        self.pixels[y * self.width + x] = value;
        Ok(())
    }
}

/// Collect the coordinates of contour pixels.
///
/// Scans row by row, left to right, and returns `(x, y)` for every pixel
/// equal to [`CONTOUR_VALUE`], stopping after `max_points`.
///
/// # Example
///
/// ```
/// use scan_io::{GrayImage, extract_contour_points};
///
/// let mut image = GrayImage::filled(4, 3, 0);
/// image.set(2, 0, 255)?;
/// image.set(1, 2, 255)?;
///
/// let points = extract_contour_points(&image, 50);
/// assert_eq!(points.len(), 2);
/// assert_eq!((points[0].x, points[0].y), (2.0, 0.0));
/// assert_eq!((points[1].x, points[1].y), (1.0, 2.0));
/// # Ok::<(), scan_io::ScanIoError>(())
/// ```
#[must_use]
pub fn extract_contour_points(image: &GrayImage, max_points: usize) -> Vec<Point2<f64>> {
    let points: Vec<Point2<f64>> = image
        .pixels
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == CONTOUR_VALUE)
        .take(max_points)
        .map(|(index, _)| {
            Point2::new(
                (index % image.width) as f64,
                (index / image.width) as f64,
            )
        })
        .collect();

    debug!(
        width = image.width,
        height = image.height,
        points = points.len(),
        "Extracted contour points"
    );
    points
}
