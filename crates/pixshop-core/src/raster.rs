//! Pixel and image data model.
//!
//! The engine operates on [`Image`] values: rectangular, row-major grids of
//! RGB [`Pixel`]s. All validation happens at the factories in this module;
//! once an `Image` exists, every operation in the crate is total and
//! returns a freshly allocated result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for pixel and image construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// A channel value outside [0, 255] at pixel construction.
    #[error("{channel} channel value {value} is outside 0..=255")]
    OutOfRange {
        /// Name of the offending channel.
        channel: &'static str,
        /// The rejected value.
        value: i32,
    },

    /// Rows of differing lengths at image construction.
    #[error("row {row} has {len} pixels, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// The width established by the first row.
        expected: usize,
    },

    /// Empty and non-empty rows mixed at image construction.
    ///
    /// A zero-width image is valid only when every row is empty.
    #[error("empty and non-empty rows mixed at row {row}")]
    EmptyRowInconsistency {
        /// Index of the row that broke uniformity.
        row: usize,
    },
}

fn opaque_alpha() -> u8 {
    255
}

/// A single RGB pixel.
///
/// The alpha channel is carried through for interchange with RGBA buffers
/// but is never read by any operation in this crate. In serialized form the
/// alpha field may be omitted and defaults to 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8,
    #[serde(default = "opaque_alpha")]
    a: u8,
}

impl Pixel {
    /// Create an opaque pixel from RGB channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a pixel with an explicit alpha channel.
    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a neutral gray pixel with r = g = b = `value`.
    pub fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Create a pixel from untrusted channel values.
    ///
    /// Fails with [`ImageError::OutOfRange`] if any channel falls outside
    /// [0, 255]. Out-of-range values are rejected, never clamped.
    pub fn from_channels(r: i32, g: i32, b: i32) -> Result<Self, ImageError> {
        Ok(Self::new(
            validate_channel("red", r)?,
            validate_channel("green", g)?,
            validate_channel("blue", b)?,
        ))
    }

    /// Get the red channel value.
    #[inline]
    pub fn red(self) -> u8 {
        self.r
    }

    /// Get the green channel value.
    #[inline]
    pub fn green(self) -> u8 {
        self.g
    }

    /// Get the blue channel value.
    #[inline]
    pub fn blue(self) -> u8 {
        self.b
    }

    /// Get the alpha channel value.
    #[inline]
    pub fn alpha(self) -> u8 {
        self.a
    }
}

fn validate_channel(channel: &'static str, value: i32) -> Result<u8, ImageError> {
    u8::try_from(value).map_err(|_| ImageError::OutOfRange { channel, value })
}

/// A rectangular grid of pixels stored row-major.
///
/// Width or height of zero is a valid degenerate empty image. Images are
/// never mutated after construction; every operation builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Create an image from dimensions and a row-major pixel buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(
            pixels.len() as u64,
            u64::from(width) * u64::from(height),
            "pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build an image from nested pixel rows, validating rectangularity.
    ///
    /// Fails with [`ImageError::RaggedRows`] when row lengths differ, or
    /// with [`ImageError::EmptyRowInconsistency`] when empty and non-empty
    /// rows are mixed. Uniformly empty rows build a valid zero-width image.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, ImageError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                if row.is_empty() || width == 0 {
                    return Err(ImageError::EmptyRowInconsistency { row: i });
                }
                return Err(ImageError::RaggedRows {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
        }
        let pixels = rows.into_iter().flatten().collect();
        Ok(Self::new(width as u32, height as u32, pixels))
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check if this is a degenerate zero-area image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The row-major pixel buffer.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Get the pixel at (row, col), or `None` when out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<Pixel> {
        if row < self.height && col < self.width {
            Some(self.pixels[self.index(row, col)])
        } else {
            None
        }
    }

    /// Get the pixel at (row, col).
    ///
    /// Panics when the position is out of bounds; use [`Image::get`] for
    /// checked access.
    #[inline]
    pub fn at(&self, row: u32, col: u32) -> Pixel {
        assert!(
            row < self.height && col < self.width,
            "pixel ({}, {}) out of bounds for {}x{} image",
            row,
            col,
            self.width,
            self.height
        );
        self.pixels[self.index(row, col)]
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Iterate over the rows as width-length slices.
    pub fn rows(&self) -> std::slice::Chunks<'_, Pixel> {
        // chunks() needs a nonzero size; a zero-width image has no pixels,
        // so the substitute size never yields an item
        self.pixels.chunks((self.width as usize).max(1))
    }

    /// Create an image from a decoded `image` crate RGB buffer.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| Pixel::new(p[0], p[1], p[2])).collect();
        Self::new(width, height, pixels)
    }

    /// Create an image from a decoded RGBA buffer, carrying alpha through.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Pixel::with_alpha(p[0], p[1], p[2], p[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Convert to an `image` crate RGB buffer, dropping alpha.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let mut raw = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            raw.extend_from_slice(&[p.red(), p.green(), p.blue()]);
        }
        image::RgbImage::from_raw(self.width, self.height, raw)
    }

    /// Convert to an `image` crate RGBA buffer.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.to_rgba_bytes())
    }

    /// Create an image from a raw RGBA byte buffer (4 bytes per pixel,
    /// row-major), the layout of a canvas `ImageData` buffer.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Self {
        debug_assert_eq!(
            bytes.len() as u64,
            u64::from(width) * u64::from(height) * 4,
            "RGBA buffer size mismatch"
        );
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Pixel::with_alpha(c[0], c[1], c[2], c[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// The pixel data as raw RGBA bytes (4 per pixel, row-major).
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            bytes.extend_from_slice(&[p.red(), p.green(), p.blue(), p.alpha()]);
        }
        bytes
    }
}
