//! Grayscale conversion.

use crate::luminance::luminance;
use crate::raster::{Image, Pixel};

/// Convert an image to grayscale.
///
/// Each pixel becomes a neutral gray at its own luminance; dimensions are
/// unchanged.
pub fn grayscale(image: &Image) -> Image {
    let pixels = image
        .pixels()
        .iter()
        .map(|&p| Pixel::gray(luminance(p)))
        .collect();
    Image::new(image.width(), image.height(), pixels)
}
