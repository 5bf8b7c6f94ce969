//! Luminance histogram construction and prefix summation.
//!
//! A histogram maps each luminance value to the number of pixels carrying
//! it; the cumulative form is its running prefix sum. Both feed the
//! equalizer and are exposed for display purposes.

use crate::luminance::luminance;
use crate::raster::Image;
use crate::{CumulativeHistogram, Histogram};

/// Compute the luminance histogram of an image.
///
/// Single pass: one bin increment per pixel. The bin counts sum to the
/// image's pixel count; an empty image yields an all-zero histogram.
pub fn compute_histogram(image: &Image) -> Histogram {
    let mut histogram = Histogram::new();
    for &pixel in image.pixels() {
        histogram.counts[luminance(pixel) as usize] += 1;
    }
    histogram
}

/// Derive the cumulative histogram by prefix summation.
///
/// The entry at luminance v counts the pixels with luminance <= v, so the
/// sequence is non-decreasing and ends at the source pixel count.
pub fn cumulative_histogram(histogram: &Histogram) -> CumulativeHistogram {
    let mut cumulative = CumulativeHistogram { counts: [0; 256] };
    let mut running = 0u64;
    for (bin, count) in histogram.counts.iter().enumerate() {
        running += u64::from(*count);
        cumulative.counts[bin] = running;
    }
    cumulative
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::raster::Pixel;
    use proptest::prelude::*;

    /// Strategy for arbitrary small images, including degenerate ones.
    fn image_strategy() -> impl Strategy<Value = Image> {
        (0u32..=16, 0u32..=16).prop_flat_map(|(width, height)| {
            proptest::collection::vec(any::<(u8, u8, u8)>(), (width * height) as usize).prop_map(
                move |channels| {
                    let pixels = channels
                        .into_iter()
                        .map(|(r, g, b)| Pixel::new(r, g, b))
                        .collect();
                    Image::new(width, height, pixels)
                },
            )
        })
    }

    proptest! {
        /// Property: the bin counts sum to the pixel count.
        #[test]
        fn prop_histogram_sums_to_pixel_count(img in image_strategy()) {
            let hist = compute_histogram(&img);
            prop_assert_eq!(hist.total(), img.pixel_count());
        }

        /// Property: the cumulative histogram never decreases and ends at
        /// the pixel count.
        #[test]
        fn prop_cumulative_monotonic_and_complete(img in image_strategy()) {
            let cumulative = cumulative_histogram(&compute_histogram(&img));
            for window in cumulative.counts.windows(2) {
                prop_assert!(window[0] <= window[1]);
            }
            prop_assert_eq!(cumulative.total(), img.pixel_count());
        }
    }
}
