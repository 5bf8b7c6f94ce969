//! WASM bindings for the geometric transforms.
//!
//! Thin wrappers: unpack the RGBA buffer into a core image, run the pure
//! transform, repack. Every call returns a new `JsImage`.

use crate::types::JsImage;
use pixshop_core::transform;
use wasm_bindgen::prelude::*;

/// Mirror an image left-to-right. Dimensions are unchanged.
///
/// # Example (TypeScript)
/// ```typescript
/// const mirrored = flip_horizontal(sourceImage);
/// ```
#[wasm_bindgen]
pub fn flip_horizontal(image: &JsImage) -> JsImage {
    JsImage::from_image(transform::flip_horizontal(&image.to_image()))
}

/// Mirror an image top-to-bottom. Dimensions are unchanged.
#[wasm_bindgen]
pub fn flip_vertical(image: &JsImage) -> JsImage {
    JsImage::from_image(transform::flip_vertical(&image.to_image()))
}

/// Rotate an image 90 degrees counter-clockwise. Width and height swap.
#[wasm_bindgen]
pub fn rotate_left(image: &JsImage) -> JsImage {
    JsImage::from_image(transform::rotate_left(&image.to_image()))
}

/// Rotate an image 90 degrees clockwise. Width and height swap.
#[wasm_bindgen]
pub fn rotate_right(image: &JsImage) -> JsImage {
    JsImage::from_image(transform::rotate_right(&image.to_image()))
}
