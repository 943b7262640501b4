//! Whole-image colour operations.

use image::{imageops, Rgba, RgbaImage};

use crate::types::Colour;

/// Copy of `image` with every pixel exactly equal to `from` set to `to`.
pub fn replace_colour(image: &RgbaImage, from: Colour, to: Colour) -> RgbaImage {
    let (from, to): (Rgba<u8>, Rgba<u8>) = (from.into(), to.into());
    let mut out = image.clone();
    for pixel in out.pixels_mut().filter(|p| **p == from) {
        *pixel = to;
    }
    out
}

/// `base` with `overlay` alpha-composited on top.
///
/// Both images are anchored at the top-left corner; any part of the overlay
/// beyond `base`'s bounds is dropped.
pub fn composite(base: &RgbaImage, overlay: &RgbaImage) -> RgbaImage {
    let mut out = base.clone();
    imageops::overlay(&mut out, overlay, 0, 0);
    out
}
