//! Uncompressed BMP decoding and in-place pixel operations.
//!
//! # Header Layout
//!
//! ```text
//! offset  size  field
//!  0      2     "BM" magic
//!  2      4     file size
//! 10      4     pixel data offset (header length)
//! 14      4     info header size
//! 18      4     width
//! 22      4     height (positive: rows stored bottom-up)
//! 26      2     planes
//! 28      2     bits per pixel
//! 34      4     image size (may be 0)
//! ```
//!
//! Rows are padded to a multiple of 4 bytes. When the image size field is
//! zero it is derived from the padded row size.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ScanIoError, ScanIoResult};
use crate::image::GrayImage;

/// Minimal file + info header size.
pub const HEADER_SIZE: usize = 54;

const DATA_OFFSET_INDEX: usize = 10;
const INFO_SIZE_INDEX: usize = 14;
const WIDTH_INDEX: usize = 18;
const HEIGHT_INDEX: usize = 22;
const PLANES_INDEX: usize = 26;
const BITS_PER_PIXEL_INDEX: usize = 28;
const IMAGE_SIZE_INDEX: usize = 34;
const INFO_HEADER_SIZE: u32 = 40;

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn read_i32(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Bytes per stored row, padded to 4.
fn padded_row_size(width: usize, bits_per_pixel: u16) -> usize {
    (width * usize::from(bits_per_pixel)).div_ceil(32) * 4
}

/// A decoded bitmap: raw header bytes plus stored pixel rows.
///
/// Pixels are kept exactly as stored (BGR(A) order, bottom-up for
/// positive heights) so the image can be written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpImage {
    header: Vec<u8>,
    data: Vec<u8>,
    width: usize,
    height: usize,
    bits_per_pixel: u16,
}

impl BmpImage {
    /// Decode a BMP from memory.
    ///
    /// Extended headers (pixel offset past 54 bytes) are kept whole.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is shorter than its headers or declared pixel data
    /// - The magic is not `BM` or the dimensions are not positive
    /// - The bit depth is not 8, 24 or 32
    pub fn decode(bytes: &[u8]) -> ScanIoResult<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(ScanIoError::Truncated {
                expected: HEADER_SIZE,
                got: bytes.len(),
            });
        }
        if &bytes[..2] != b"BM" {
            return Err(ScanIoError::invalid_bmp("missing BM magic"));
        }

        let header_len = match read_u32(bytes, DATA_OFFSET_INDEX) as usize {
            0 => HEADER_SIZE,
            n => n.max(HEADER_SIZE),
        };
        if bytes.len() < header_len {
            return Err(ScanIoError::Truncated {
                expected: header_len,
                got: bytes.len(),
            });
        }

        let width = read_i32(bytes, WIDTH_INDEX);
        let height = read_i32(bytes, HEIGHT_INDEX);
        let (Ok(width), Ok(height)) = (usize::try_from(width), usize::try_from(height)) else {
            return Err(ScanIoError::invalid_bmp(format!(
                "unsupported dimensions {width}x{height}"
            )));
        };
        if width == 0 || height == 0 {
            return Err(ScanIoError::invalid_bmp(format!(
                "empty image {width}x{height}"
            )));
        }

        let bits_per_pixel = read_u16(bytes, BITS_PER_PIXEL_INDEX);
        if !matches!(bits_per_pixel, 8 | 24 | 32) {
            return Err(ScanIoError::UnsupportedBitDepth {
                bits: bits_per_pixel,
            });
        }

        let min_size = padded_row_size(width, bits_per_pixel) * height;
        let image_size = match read_u32(bytes, IMAGE_SIZE_INDEX) as usize {
            0 => min_size,
            n => n.max(min_size),
        };
        let end = header_len + image_size;
        if bytes.len() < end {
            return Err(ScanIoError::Truncated {
                expected: end,
                got: bytes.len(),
            });
        }

        debug!(width, height, bits_per_pixel, header_len, "Decoded BMP");

        Ok(Self {
            header: bytes[..header_len].to_vec(),
            data: bytes[header_len..end].to_vec(),
            width,
            height,
            bits_per_pixel,
        })
    }

    /// Build a 24-bit BMP whose stored rows are the rows of `image`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn from_gray(image: &GrayImage) -> Self {
        let width = image.width();
        let height = image.height();
        let row_size = padded_row_size(width, 24);
        let image_size = row_size * height;

        let mut header = vec![0u8; HEADER_SIZE];
        header[..2].copy_from_slice(b"BM");
        header[2..6].copy_from_slice(&((HEADER_SIZE + image_size) as u32).to_le_bytes());
        header[DATA_OFFSET_INDEX..DATA_OFFSET_INDEX + 4]
            .copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
        header[INFO_SIZE_INDEX..INFO_SIZE_INDEX + 4].copy_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
        header[WIDTH_INDEX..WIDTH_INDEX + 4].copy_from_slice(&(width as i32).to_le_bytes());
        header[HEIGHT_INDEX..HEIGHT_INDEX + 4].copy_from_slice(&(height as i32).to_le_bytes());
        header[PLANES_INDEX..PLANES_INDEX + 2].copy_from_slice(&1u16.to_le_bytes());
        header[BITS_PER_PIXEL_INDEX..BITS_PER_PIXEL_INDEX + 2].copy_from_slice(&24u16.to_le_bytes());
        header[IMAGE_SIZE_INDEX..IMAGE_SIZE_INDEX + 4]
            .copy_from_slice(&(image_size as u32).to_le_bytes());

        let mut data = vec![0u8; image_size];
        for (row, out) in image
            .pixels()
            .chunks_exact(width.max(1))
            .zip(data.chunks_exact_mut(row_size.max(1)))
        {
            for (&value, px) in row.iter().zip(out.chunks_exact_mut(3)) {
                px.fill(value);
            }
        }

        Self {
            header,
            data,
            width,
            height,
            bits_per_pixel: 24,
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

    /// Bits per pixel (8, 24 or 32).
    #[must_use]
    pub const fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    /// Raw header bytes, including any extended header.
    #[must_use]
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// Stored pixel bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bits_per_pixel / 8)
    }

    fn row_size(&self) -> usize {
        padded_row_size(self.width, self.bits_per_pixel)
    }

    /// Replace every color pixel with its luma, `0.3 R + 0.59 G + 0.11 B`.
    ///
    /// Channels are stored B, G, R. 8-bit images are left unchanged.
    pub fn apply_gray_filter(&mut self) {
        let bpp = self.bytes_per_pixel();
        if bpp < 3 {
            return;
        }
        let row_size = self.row_size();
        let row_bytes = self.width * bpp;
        for row in self.data.chunks_exact_mut(row_size).take(self.height) {
            for px in row[..row_bytes].chunks_exact_mut(bpp) {
                let gray = luma(px[2], px[1], px[0]);
                px[..3].fill(gray);
            }
        }
    }

    /// Reverse the order of the stored rows.
    pub fn flip_vertically(&mut self) {
        let row_size = self.row_size();
        let height = self.height;
        let rows = &mut self.data[..row_size * height];
        for row in 0..height / 2 {
            let (top, bottom) = rows.split_at_mut((height - row - 1) * row_size);
            top[row * row_size..(row + 1) * row_size].swap_with_slice(&mut bottom[..row_size]);
        }
    }

    /// Convert to a grayscale image, one row per stored row.
    ///
    /// 8-bit pixels are taken as intensities; color pixels use the same
    /// luma as [`apply_gray_filter`](Self::apply_gray_filter).
    #[must_use]
    pub fn to_gray(&self) -> GrayImage {
        let bpp = self.bytes_per_pixel();
        let row_size = self.row_size();
        let mut pixels = Vec::with_capacity(self.width * self.height);
        for row in self.data.chunks_exact(row_size).take(self.height) {
            pixels.extend(row[..self.width * bpp].chunks_exact(bpp).map(|px| {
                if bpp == 1 {
                    px[0]
                } else {
                    luma(px[2], px[1], px[0])
                }
            }));
        }
        GrayImage::from_raw(self.width, self.height, pixels)
    }

    /// Header followed by pixel data.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header.len() + self.data.len());
        bytes.extend_from_slice(&self.header);
        bytes.extend_from_slice(&self.data);
        bytes
    }
}

/// Integer luma, exact for equal channels.
#[allow(clippy::cast_possible_truncation)]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((30 * u32::from(r) + 59 * u32::from(g) + 11 * u32::from(b)) / 100) as u8
}

/// Read and decode a BMP file.
///
/// # Errors
///
/// Returns [`ScanIoError::FileNotFound`] if the file does not exist, or any
/// error from [`BmpImage::decode`].
pub fn read_bmp<P: AsRef<Path>>(path: P) -> ScanIoResult<BmpImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ScanIoError::from_open(e, path))?;
    BmpImage::decode(&bytes)
}

/// Write a BMP file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_bmp<P: AsRef<Path>>(image: &BmpImage, path: P) -> ScanIoResult<()> {
    fs::write(path, image.encode())?;
    Ok(())
}
