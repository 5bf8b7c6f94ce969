//! Luminance calculation using the ITU-R BT.601 weights.
//!
//! Shared by histogram construction and the tonal operations. Luminance is
//! derived from a pixel's channels on demand; it is never stored.

use crate::raster::Pixel;

/// BT.601 coefficient for the red channel.
pub const LUMA_R: f32 = 0.299;

/// BT.601 coefficient for the green channel.
pub const LUMA_G: f32 = 0.587;

/// BT.601 coefficient for the blue channel.
pub const LUMA_B: f32 = 0.114;

/// Perceptual luminance of a pixel, rounded to 0..=255.
#[inline]
pub fn luminance(pixel: Pixel) -> u8 {
    luminance_channels(pixel.red(), pixel.green(), pixel.blue())
}

/// Perceptual luminance from raw channel values (0-255 each).
#[inline]
pub fn luminance_channels(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}
