//! Angle-indexed collection of preprocessed rings.

use nalgebra::Point2;
use tracing::{debug, warn};

use crate::error::RingResult;
use crate::params::RingParams;
use crate::preprocess::preprocess_ring;
use crate::ring::Ring;

/// One slot per acquisition angle; degenerate slices leave their slot empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingSet {
    slots: Vec<Option<Ring>>,
}

impl RingSet {
    /// Preprocess the first `num_images` slices.
    ///
    /// Slices past `num_images` are ignored; missing trailing slices count
    /// as skipped angles.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation.
    ///
    /// # Example
    ///
    /// ```
    /// use nalgebra::Point2;
    /// use scan_ring::{RingParams, RingSet};
    ///
    /// let square = vec![
    ///     Point2::new(100.0, 50.0),
    ///     Point2::new(140.0, 50.0),
    ///     Point2::new(140.0, 90.0),
    ///     Point2::new(100.0, 90.0),
    /// ];
    /// let slices = vec![square.clone(), Vec::new(), square];
    ///
    /// let set = RingSet::from_slices(&slices, 4, &RingParams::default())?;
    /// assert_eq!(set.num_slots(), 4);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.skipped(), vec![1, 3]);
    /// # Ok::<(), scan_ring::RingError>(())
    /// ```
    pub fn from_slices(
        slices: &[Vec<Point2<f64>>],
        num_images: usize,
        params: &RingParams,
    ) -> RingResult<Self> {
        params.validate()?;

        let mut slots = Vec::with_capacity(num_images);
        for index in 0..num_images {
            let ring = match slices.get(index) {
                Some(points) => preprocess_ring(points.clone(), params)?,
                None => None,
            };
            if ring.is_none() {
                warn!(angle_index = index, "No points found in slice, skipping");
            }
            slots.push(ring);
        }

        let set = Self { slots };
        debug!(
            used = set.len(),
            skipped = set.num_slots() - set.len(),
            "Built ring set"
        );
        Ok(set)
    }

    /// Total number of angle slots.
    #[must_use]
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Number of rings present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if no slice produced a ring.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ring for angle `index`, if that slice was usable.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Ring> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Present rings with their angle index, in angle order.
    pub fn present(&self) -> impl Iterator<Item = (usize, &Ring)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|ring| (index, ring)))
    }

    /// Angle indices whose slice was skipped.
    #[must_use]
    pub fn skipped(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.is_none().then_some(index))
            .collect()
    }
}
