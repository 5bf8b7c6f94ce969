//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Pixshop types, handling the conversion between Rust and JavaScript data
//! representations.

use pixshop_core::{Image, Pixel};
use wasm_bindgen::prelude::*;

/// An image wrapper for JavaScript.
///
/// Pixel data is RGBA (4 bytes per pixel, row-major), the byte layout of a
/// canvas `ImageData` buffer, so images can be drawn and captured without
/// repacking.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to
/// JavaScript memory as a `Uint8Array`; call `free()` to release the WASM
/// side eagerly, or let wasm-bindgen's finalizer handle it.
#[wasm_bindgen]
pub struct JsImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new JsImage from dimensions and RGBA pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            pixels,
        }
    }

    /// Create a JsImage from a canvas `ImageData` buffer.
    pub fn from_image_data(
        width: u32,
        height: u32,
        data: &js_sys::Uint8ClampedArray,
    ) -> JsImage {
        JsImage {
            width,
            height,
            pixels: data.to_vec(),
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: this copies the pixel data into JavaScript memory.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImage {
    /// Create a JsImage from a core Image.
    pub(crate) fn from_image(image: Image) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.to_rgba_bytes(),
        }
    }

    /// Convert back to a core Image. Clones the pixel data.
    pub(crate) fn to_image(&self) -> Image {
        Image::from_rgba_bytes(self.width, self.height, &self.pixels)
    }
}

/// Build an image from nested pixel rows passed as a plain JS value.
///
/// Rows are arrays of `{ r, g, b }` or `{ r, g, b, a }` objects. Ragged
/// rows and mixed empty/non-empty rows are rejected with an error message.
///
/// # Example (TypeScript)
/// ```typescript
/// const image = image_from_rows([
///   [{ r: 255, g: 0, b: 0 }, { r: 0, g: 255, b: 0 }],
///   [{ r: 0, g: 0, b: 255 }, { r: 0, g: 0, b: 0 }],
/// ]);
/// ```
#[wasm_bindgen]
pub fn image_from_rows(rows: JsValue) -> Result<JsImage, JsValue> {
    let rows: Vec<Vec<Pixel>> = serde_wasm_bindgen::from_value(rows)
        .map_err(|e| JsValue::from_str(&format!("Invalid pixel rows: {}", e)))?;
    let image = Image::from_rows(rows).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsImage::from_image(image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_image_creation() {
        let img = JsImage::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_js_image_pixels() {
        let pixels = vec![255u8, 128, 64, 255, 32, 16, 8, 255]; // 2 RGBA pixels
        let img = JsImage::new(2, 1, pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_from_image() {
        let core = Image::new(1, 2, vec![Pixel::new(1, 2, 3), Pixel::with_alpha(4, 5, 6, 7)]);
        let js = JsImage::from_image(core);
        assert_eq!(js.width(), 1);
        assert_eq!(js.height(), 2);
        assert_eq!(js.pixels(), vec![1, 2, 3, 255, 4, 5, 6, 7]);
    }

    #[test]
    fn test_to_image_round_trip() {
        let js = JsImage::new(2, 1, vec![9, 8, 7, 255, 1, 2, 3, 100]);
        let core = js.to_image();
        assert_eq!(core.at(0, 0), Pixel::new(9, 8, 7));
        assert_eq!(core.at(0, 1), Pixel::with_alpha(1, 2, 3, 100));
        let back = JsImage::from_image(core);
        assert_eq!(back.pixels(), js.pixels());
    }
}
