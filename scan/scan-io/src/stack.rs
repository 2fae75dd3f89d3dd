//! Fixed-capacity stack of slice images.

use nalgebra::Point2;

use crate::error::{ScanIoError, ScanIoResult};
use crate::image::{GrayImage, extract_contour_points};

/// Default number of slices in one acquisition.
pub const DEFAULT_NUM_IMAGES: usize = 12;

/// The images of one acquisition, in angle order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStack {
    capacity: usize,
    images: Vec<GrayImage>,
}

impl Default for ImageStack {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_IMAGES)
    }
}

impl ImageStack {
    /// An empty stack that accepts up to `capacity` images.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            images: Vec::with_capacity(capacity),
        }
    }

    /// Append the next slice.
    ///
    /// # Errors
    ///
    /// Returns [`ScanIoError::StackFull`] once `capacity` images are stored.
    pub fn push(&mut self, image: GrayImage) -> ScanIoResult<()> {
        if self.images.len() >= self.capacity {
            return Err(ScanIoError::StackFull {
                capacity: self.capacity,
            });
        }
        self.images.push(image);
        Ok(())
    }

    /// The `n`th stored image.
    ///
    /// # Errors
    ///
    /// Returns [`ScanIoError::IndexOutOfRange`] if `n` is past the stored
    /// images.
    pub fn get(&self, n: usize) -> ScanIoResult<&GrayImage> {
        self.images.get(n).ok_or(ScanIoError::IndexOutOfRange {
            index: n,
            len: self.images.len(),
        })
    }

    /// Number of stored images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Check if no image is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Maximum number of images.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over the stored images in order.
    pub fn iter(&self) -> std::slice::Iter<'_, GrayImage> {
        self.images.iter()
    }

    /// Contour points of every image, one slice per stored image.
    #[must_use]
    pub fn contour_slices(&self, max_points: usize) -> Vec<Vec<Point2<f64>>> {
        self.images
            .iter()
            .map(|image| extract_contour_points(image, max_points))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ImageStack {
    type Item = &'a GrayImage;
    type IntoIter = std::slice::Iter<'a, GrayImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
