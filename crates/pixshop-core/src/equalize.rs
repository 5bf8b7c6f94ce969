//! Histogram equalization.
//!
//! Tone remapping driven by the cumulative luminance distribution. The
//! remap is precomputed once as a 256-entry lookup table and applied per
//! pixel, so the whole operation is two passes over the image.

use crate::histogram::{compute_histogram, cumulative_histogram};
use crate::luminance::luminance;
use crate::raster::{Image, Pixel};
use crate::CumulativeHistogram;

/// Equalize an image's tonal range.
///
/// Each pixel is replaced with a neutral gray whose level is the pixel's
/// original luminance remapped through the cumulative distribution:
/// `round(255 * cumulative[L] / total)`. The output is always gray,
/// whatever the original hue.
///
/// An empty image is returned as-is. Equalization is not idempotent:
/// re-running it on an already equalized image is a further, distinct
/// transform.
pub fn equalize(image: &Image) -> Image {
    if image.is_empty() {
        return image.clone();
    }
    let cumulative = cumulative_histogram(&compute_histogram(image));
    let lut = remap_lut(&cumulative);
    let pixels = image
        .pixels()
        .iter()
        .map(|&p| Pixel::gray(lut[luminance(p) as usize]))
        .collect();
    Image::new(image.width(), image.height(), pixels)
}

/// Build the luminance remap table from the cumulative distribution.
///
/// Requires a non-zero total; the caller short-circuits empty images.
fn remap_lut(cumulative: &CumulativeHistogram) -> [u8; 256] {
    let total = cumulative.total() as f64;
    let mut lut = [0u8; 256];
    for (level, entry) in lut.iter_mut().enumerate() {
        let remapped = (255.0 * cumulative.counts[level] as f64 / total).round();
        *entry = remapped.clamp(0.0, 255.0) as u8;
    }
    lut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equalize_empty_image() {
        let img = Image::new(0, 0, vec![]);
        let result = equalize(&img);
        assert_eq!(result, img);
    }

    #[test]
    fn test_equalize_zero_width_image() {
        let img = Image::from_rows(vec![vec![], vec![]]).unwrap();
        let result = equalize(&img);
        assert_eq!((result.width(), result.height()), (0, 2));
    }

    #[test]
    fn test_equalize_four_level_image() {
        // Luminances 0, 85, 170, 255: one pixel each, so the cumulative
        // counts are 1, 2, 3, 4 and the remap sends them to
        // round(255 * k / 4) = 64, 128, 191, 255.
        let img = Image::from_rows(vec![
            vec![Pixel::gray(0), Pixel::gray(85)],
            vec![Pixel::gray(170), Pixel::gray(255)],
        ])
        .unwrap();
        let result = equalize(&img);
        assert_eq!(result.at(0, 0), Pixel::gray(64));
        assert_eq!(result.at(0, 1), Pixel::gray(128));
        assert_eq!(result.at(1, 0), Pixel::gray(191));
        assert_eq!(result.at(1, 1), Pixel::gray(255));
    }

    #[test]
    fn test_equalize_uniform_image_goes_white() {
        // Every pixel shares one luminance, so cumulative[L] = total and
        // the remap sends all of them to 255.
        let img = Image::new(4, 4, vec![Pixel::gray(7); 16]);
        let result = equalize(&img);
        assert!(result.pixels().iter().all(|&p| p == Pixel::gray(255)));
    }

    #[test]
    fn test_equalize_desaturates() {
        let img = Image::new(
            2,
            1,
            vec![Pixel::new(200, 30, 40), Pixel::new(12, 150, 230)],
        );
        let result = equalize(&img);
        for p in result.pixels() {
            assert_eq!(p.red(), p.green());
            assert_eq!(p.green(), p.blue());
        }
    }

    #[test]
    fn test_equalize_preserves_dimensions() {
        let img = Image::new(5, 3, vec![Pixel::gray(10); 15]);
        let result = equalize(&img);
        assert_eq!((result.width(), result.height()), (5, 3));
    }

    #[test]
    fn test_equalize_does_not_touch_input() {
        let img = Image::new(1, 1, vec![Pixel::gray(10)]);
        let _ = equalize(&img);
        assert_eq!(img.at(0, 0), Pixel::gray(10));
    }

    #[test]
    fn test_remap_lut_single_level() {
        let mut cumulative = CumulativeHistogram { counts: [0; 256] };
        for level in 42..256 {
            cumulative.counts[level] = 9;
        }
        let lut = remap_lut(&cumulative);
        assert_eq!(lut[41], 0);
        assert_eq!(lut[42], 255);
        assert_eq!(lut[255], 255);
    }
}
