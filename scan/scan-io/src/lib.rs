//! Slice sources for rotational ultrasound reconstruction.
//!
//! An acquisition produces one 2D contour per probe angle. This crate gets
//! those contours from the two places the device leaves them:
//!
//! - **Bitmaps**: one BMP per angle with contour samples painted at value
//!   255 ([`read_bmp`], [`BmpImage`], [`extract_contour_points`],
//!   [`ImageStack`])
//! - **Point logs**: paired binary files of raw `u16` row/column samples
//!   ([`load_point_log`], [`PointLogLayout`])
//!
//! Both yield `Vec<Vec<Point2<f64>>>`, one slice per angle index, ready for
//! ring preprocessing.
//!
//! # Example
//!
//! ```
//! use scan_io::{GrayImage, ImageStack};
//!
//! let mut stack = ImageStack::new(2);
//! for _ in 0..2 {
//!     let mut image = GrayImage::filled(240, 160, 0);
//!     image.set(120, 40, 255)?;
//!     image.set(130, 80, 255)?;
//!     stack.push(image)?;
//! }
//!
//! let slices = stack.contour_slices(scan_io::DEFAULT_MAX_CONTOUR_POINTS);
//! assert_eq!(slices.len(), 2);
//! assert_eq!(slices[0].len(), 2);
//! # Ok::<(), scan_io::ScanIoError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bmp;
mod error;
mod image;
mod pointlog;
mod stack;

pub use bmp::{BmpImage, HEADER_SIZE, read_bmp, write_bmp};
pub use error::{ScanIoError, ScanIoResult};
pub use image::{CONTOUR_VALUE, DEFAULT_MAX_CONTOUR_POINTS, GrayImage, extract_contour_points};
pub use pointlog::{
    PointLogLayout, load_point_log, load_sample_groups, pair_channels, read_sample_groups,
};
pub use stack::{DEFAULT_NUM_IMAGES, ImageStack};
