//! Histogram computation WASM bindings.
//!
//! This module provides JavaScript bindings for luminance histogram
//! computation, used for histogram display alongside the equalizer.

use crate::types::JsImage;
use pixshop_core::{compute_histogram as compute_histogram_core, cumulative_histogram};
use wasm_bindgen::prelude::*;

/// Luminance histogram result accessible from JavaScript.
///
/// Carries the 256 luminance bins, their cumulative form, and precomputed
/// summary values for display normalization.
#[wasm_bindgen]
pub struct JsHistogram {
    counts: Vec<u32>,
    cumulative: Vec<f64>,
    total: f64,
    max_count: u32,
}

#[wasm_bindgen]
impl JsHistogram {
    /// Get the luminance bin counts (256 entries).
    pub fn counts(&self) -> Vec<u32> {
        self.counts.clone()
    }

    /// Get the cumulative bin counts (256 non-decreasing entries).
    pub fn cumulative(&self) -> Vec<f64> {
        self.cumulative.clone()
    }

    /// Total number of pixels counted.
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Largest bin count, for display normalization.
    #[wasm_bindgen(getter)]
    pub fn max_count(&self) -> u32 {
        self.max_count
    }
}

/// Compute the luminance histogram of an image.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_histogram(image);
/// const bins = hist.counts();       // Uint32Array[256]
/// const scale = hist.max_count;     // For normalization
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_histogram(image: &JsImage) -> JsHistogram {
    let hist = compute_histogram_core(&image.to_image());
    let cumulative = cumulative_histogram(&hist);
    JsHistogram {
        counts: hist.counts.to_vec(),
        cumulative: cumulative.counts.iter().map(|&c| c as f64).collect(),
        total: hist.total() as f64,
        max_count: hist.max_count(),
    }
}
