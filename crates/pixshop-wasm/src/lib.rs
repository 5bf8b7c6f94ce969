//! Pixshop WASM - WebAssembly bindings for the Pixshop engine.
//!
//! This crate exposes the pixshop-core operations to JavaScript/TypeScript
//! applications. Images cross the boundary as RGBA byte buffers wrapped in
//! [`JsImage`]; every operation returns a freshly allocated image.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `transform` - flips and quarter-turn rotations
//! - `tone` - histogram equalization and grayscale
//! - `composite` - chroma-key compositing
//! - `histogram` - luminance histogram computation
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImage, rotate_left, equalize } from '@pixshop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new JsImage(width, height, new Uint8Array(rgbaBytes));
//! const rotated = rotate_left(image);
//! const balanced = equalize(rotated);
//! ```

use wasm_bindgen::prelude::*;

mod composite;
mod histogram;
mod tone;
mod transform;
mod types;

// Re-export public types
pub use composite::green_screen;
pub use histogram::{compute_histogram, JsHistogram};
pub use tone::{equalize, grayscale};
pub use transform::{flip_horizontal, flip_vertical, rotate_left, rotate_right};
pub use types::{image_from_rows, JsImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Nothing to set up yet; reserved for a console panic hook
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
