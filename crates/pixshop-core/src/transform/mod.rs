//! Geometric transform operations: flips and quarter-turn rotations.
//!
//! All transforms are pure reshapes. Each builds a fresh pixel buffer and
//! never aliases its input, so inputs stay usable after the call. They are
//! total for any valid image, including the degenerate empty image; the
//! rotations and transpose swap width and height.

mod flip;
mod rotate;

pub use flip::{flip_horizontal, flip_vertical};
pub use rotate::{rotate_left, rotate_right, transpose};
