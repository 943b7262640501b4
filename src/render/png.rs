//! PNG output for overlays and sprites.
//!
//! Writes RGBA images to PNG files with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};

use crate::error::{FxError, Result};

/// Write an image to a PNG file.
///
/// # Arguments
///
/// * `image` - The image to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(image: &RgbaImage, path: &Path, scale: u32) -> Result<()> {
    let scaled = scale_image(image, scale);

    scaled.save(path).map_err(|e| FxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Scale an image by an integer factor.
///
/// Uses nearest-neighbour scaling for crisp pixel art. A scale of 0 is
/// treated as 1.
pub fn scale_image(image: &RgbaImage, scale: u32) -> RgbaImage {
    if scale <= 1 {
        return image.clone();
    }

    let mut scaled: RgbaImage = ImageBuffer::new(image.width() * scale, image.height() * scale);

    for (x, y, pixel) in image.enumerate_pixels() {
        // Fill scaled pixels
        for sy in 0..scale {
            for sx in 0..scale {
                scaled.put_pixel(x * scale + sx, y * scale + sy, *pixel);
            }
        }
    }

    scaled
}
