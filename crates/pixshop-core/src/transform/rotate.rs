//! Quarter-turn rotations built on a transpose primitive.

use crate::raster::Image;
use crate::transform::flip_horizontal;

/// Reflect the grid across its main diagonal.
///
/// The result has width = input height and height = input width, with the
/// output at (i, j) equal to the input at (j, i). Total for any valid
/// image, including empty ones.
pub fn transpose(image: &Image) -> Image {
    let mut pixels = Vec::with_capacity(image.pixels().len());
    for col in 0..image.width() {
        for row in 0..image.height() {
            pixels.push(image.at(row, col));
        }
    }
    Image::new(image.height(), image.width(), pixels)
}

/// Rotate 90 degrees counter-clockwise. Width and height swap.
pub fn rotate_left(image: &Image) -> Image {
    transpose(&flip_horizontal(image))
}

/// Rotate 90 degrees clockwise. Width and height swap.
pub fn rotate_right(image: &Image) -> Image {
    flip_horizontal(&transpose(image))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
