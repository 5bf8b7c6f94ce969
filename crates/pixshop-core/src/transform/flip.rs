//! Row and column reflections.

use crate::raster::Image;

/// Mirror an image left-to-right.
///
/// Reverses the pixel order within each row; dimensions are unchanged.
/// The output at (r, c) is the input at (r, W-1-c).
pub fn flip_horizontal(image: &Image) -> Image {
    let mut pixels = Vec::with_capacity(image.pixels().len());
    for row in image.rows() {
        pixels.extend(row.iter().rev().copied());
    }
    Image::new(image.width(), image.height(), pixels)
}

/// Mirror an image top-to-bottom.
///
/// Reverses the row order; dimensions are unchanged. The output at (r, c)
/// is the input at (H-1-r, c).
pub fn flip_vertical(image: &Image) -> Image {
    let mut pixels = Vec::with_capacity(image.pixels().len());
    for row in image.rows().rev() {
        pixels.extend_from_slice(row);
    }
    Image::new(image.width(), image.height(), pixels)
}
