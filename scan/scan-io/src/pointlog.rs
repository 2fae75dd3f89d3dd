//! Raw point logs written by the acquisition device.
//!
//! A log is a pair of binary files, one per image axis, each a flat
//! sequence of little-endian `u16` samples. Samples form fixed-size groups
//! (one group per angle) separated by a few discarded words.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use nalgebra::Point2;
use tracing::{debug, warn};

use crate::error::{ScanIoError, ScanIoResult};

/// How samples are grouped in a point log.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLogLayout {
    /// Samples per angle group.
    pub group_size: usize,

    /// Words skipped after each group.
    pub discard: usize,

    /// Maximum number of groups to read.
    pub max_groups: usize,

    /// Factor applied to raw samples to get pixel coordinates.
    pub scale: f64,
}

impl Default for PointLogLayout {
    fn default() -> Self {
        Self {
            group_size: 49,
            discard: 2,
            max_groups: 12,
            scale: 0.5,
        }
    }
}

impl PointLogLayout {
    /// Create a layout with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of samples per group.
    #[must_use]
    pub const fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Set the number of discarded words between groups.
    #[must_use]
    pub const fn with_discard(mut self, discard: usize) -> Self {
        self.discard = discard;
        self
    }

    /// Set the maximum number of groups.
    #[must_use]
    pub const fn with_max_groups(mut self, max_groups: usize) -> Self {
        self.max_groups = max_groups;
        self
    }

    /// Set the sample scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

/// Read grouped samples from one channel of a point log.
///
/// Groups are taken while a full group remains; a trailing partial group or
/// odd byte is ignored. At most `layout.max_groups` groups are returned.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_sample_groups<R: Read>(
    mut reader: R,
    layout: &PointLogLayout,
) -> ScanIoResult<Vec<Vec<u16>>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let samples: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    let mut groups = Vec::new();
    let mut index = 0;
    while groups.len() < layout.max_groups && index + layout.group_size <= samples.len() {
        groups.push(samples[index..index + layout.group_size].to_vec());
        index += layout.group_size + layout.discard;
    }

    debug!(
        samples = samples.len(),
        groups = groups.len(),
        "Read point log channel"
    );
    Ok(groups)
}

/// Read grouped samples from a point log file.
///
/// # Errors
///
/// Returns [`ScanIoError::FileNotFound`] if the file does not exist, or an
/// I/O error if reading fails.
pub fn load_sample_groups<P: AsRef<Path>>(
    path: P,
    layout: &PointLogLayout,
) -> ScanIoResult<Vec<Vec<u16>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ScanIoError::from_open(e, path))?;
    read_sample_groups(BufReader::new(file), layout)
}

/// Combine the two channels into 2D points, one slice per group.
///
/// The x channel holds image rows and the y channel image columns, so each
/// point is `(y · scale, x · scale)`. A group that is empty, missing from
/// either channel, or of different length in the two channels becomes an
/// empty slice so later groups keep their angle index.
#[must_use]
pub fn pair_channels(x_groups: &[Vec<u16>], y_groups: &[Vec<u16>], scale: f64) -> Vec<Vec<Point2<f64>>> {
    let count = x_groups.len().max(y_groups.len());
    (0..count)
        .map(|i| match (x_groups.get(i), y_groups.get(i)) {
            (Some(xs), Some(ys)) if !xs.is_empty() && xs.len() == ys.len() => xs
                .iter()
                .zip(ys)
                .map(|(&x, &y)| Point2::new(f64::from(y) * scale, f64::from(x) * scale))
                .collect(),
            _ => {
                warn!(group = i, "Unpaired point log group, leaving slice empty");
                Vec::new()
            }
        })
        .collect()
}

/// Load both channels of a point log and pair them into slices.
///
/// # Errors
///
/// Returns an error if either file cannot be read.
pub fn load_point_log<P: AsRef<Path>, Q: AsRef<Path>>(
    x_path: P,
    y_path: Q,
    layout: &PointLogLayout,
) -> ScanIoResult<Vec<Vec<Point2<f64>>>> {
    let x_groups = load_sample_groups(x_path, layout)?;
    let y_groups = load_sample_groups(y_path, layout)?;
    Ok(pair_channels(&x_groups, &y_groups, layout.scale))
}
