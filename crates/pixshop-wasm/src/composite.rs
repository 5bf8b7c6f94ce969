//! WASM bindings for chroma-key compositing.

use crate::types::JsImage;
use wasm_bindgen::prelude::*;

/// Composite a foreground image onto a background.
///
/// The result has the background's dimensions; over the overlapping region
/// the foreground pixel is substituted wherever its green channel is less
/// than twice the stronger of its red and blue channels.
///
/// # Example (TypeScript)
/// ```typescript
/// const composed = green_screen(backgroundImage, foregroundImage);
/// ```
#[wasm_bindgen]
pub fn green_screen(background: &JsImage, foreground: &JsImage) -> JsImage {
    JsImage::from_image(pixshop_core::green_screen(
        &background.to_image(),
        &foreground.to_image(),
    ))
}
