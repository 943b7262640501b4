//! Rendering helpers for overlays.
//!
//! Writing PNGs, nearest-neighbour upscaling, compositing overlays onto
//! sprites, and flat colour replacement.

mod ops;
mod png;

pub use ops::{composite, replace_colour};
pub use png::{scale_image, write_png};
