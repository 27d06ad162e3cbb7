//! Image loading from disk.

use std::path::Path;

use image::{ColorType, DynamicImage};

use crate::error::{PixtralError, Result};

use super::RawImage;

/// Load an image file as a channels-last float tensor in [0, 1].
///
/// Grayscale files become (H, W), files with an alpha channel (H, W, 4),
/// everything else (H, W, 3).
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RawImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| {
        PixtralError::InvalidArgument(format!("failed to load image {}: {e}", path.display()))
    })?;
    image_to_tensor(&img)
}

fn image_to_tensor(img: &DynamicImage) -> Result<RawImage> {
    let (width, height) = (img.width() as usize, img.height() as usize);

    let (shape, samples) = match img.color() {
        ColorType::L8 | ColorType::L16 => (vec![height, width], img.to_luma8().into_raw()),
        color if color.has_alpha() => (vec![height, width, 4], img.to_rgba8().into_raw()),
        _ => (vec![height, width, 3], img.to_rgb8().into_raw()),
    };

    let values = samples.into_iter().map(|v| f32::from(v) / 255.0).collect();
    RawImage::from_shape_vec(&shape, values)
}
