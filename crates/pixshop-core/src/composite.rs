//! Chroma-key compositing.

use crate::raster::{Image, Pixel};

/// Composite a foreground image onto a background.
///
/// The result has the background's dimensions. Over the overlapping region
/// the foreground pixel is substituted wherever the keying predicate
/// holds; everywhere else the background shows through unchanged. A
/// zero-area overlap yields a plain copy of the background.
pub fn green_screen(background: &Image, foreground: &Image) -> Image {
    let rows = background.height().min(foreground.height());
    let cols = background.width().min(foreground.width());
    let width = background.width() as usize;
    let mut pixels = background.pixels().to_vec();
    for row in 0..rows {
        for col in 0..cols {
            let candidate = foreground.at(row, col);
            if foreground_wins(candidate) {
                pixels[row as usize * width + col as usize] = candidate;
            }
        }
    }
    Image::new(background.width(), background.height(), pixels)
}

/// Keying predicate: the foreground pixel is substituted exactly when its
/// green channel is less than twice the stronger of its red and blue
/// channels. Callers rely on this precise inequality.
#[inline]
fn foreground_wins(pixel: Pixel) -> bool {
    u16::from(pixel.green()) < 2 * u16::from(pixel.blue().max(pixel.red()))
}
