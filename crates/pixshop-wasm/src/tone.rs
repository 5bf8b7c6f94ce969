//! WASM bindings for the tonal operations.

use crate::types::JsImage;
use wasm_bindgen::prelude::*;

/// Equalize an image's tonal range.
///
/// Output pixels are neutral gray, keyed by the source luminance remapped
/// through the cumulative histogram. An empty image is returned unchanged.
///
/// # Example (TypeScript)
/// ```typescript
/// const balanced = equalize(sourceImage);
/// ```
#[wasm_bindgen]
pub fn equalize(image: &JsImage) -> JsImage {
    JsImage::from_image(pixshop_core::equalize(&image.to_image()))
}

/// Convert an image to grayscale.
///
/// Each pixel becomes a neutral gray at its own luminance.
#[wasm_bindgen]
pub fn grayscale(image: &JsImage) -> JsImage {
    JsImage::from_image(pixshop_core::grayscale(&image.to_image()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equalize_uniform_image() {
        // A single tone occupies the whole distribution and maps to white
        let img = JsImage::new(2, 2, vec![40, 40, 40, 255].repeat(4));
        let result = equalize(&img);
        assert_eq!(result.pixels(), vec![255, 255, 255, 255].repeat(4));
    }

    #[test]
    fn test_equalize_empty_image() {
        let img = JsImage::new(0, 0, vec![]);
        let result = equalize(&img);
        assert_eq!(result.width(), 0);
        assert_eq!(result.height(), 0);
        assert_eq!(result.byte_length(), 0);
    }

    #[test]
    fn test_grayscale_output_is_gray() {
        let img = JsImage::new(1, 1, vec![255, 0, 0, 255]);
        let result = grayscale(&img);
        // 0.299 * 255 = 76.24 -> 76
        assert_eq!(result.pixels(), vec![76, 76, 76, 255]);
    }
}
