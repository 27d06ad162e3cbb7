//! Conversion of raw float tensors into 8-bit canonical images.

use image::{DynamicImage, GrayImage, RgbImage};
use ndarray::{ArrayViewD, Axis, IxDyn, Slice};
use strum::Display;
use tracing::debug;

use crate::error::{PixtralError, Result};

use super::{resolve_layout, ImageLayout, RawImage};

/// Color mode of a canonical image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ColorMode {
    Luminance,
    Rgb,
}

impl ColorMode {
    pub fn channels(self) -> usize {
        match self {
            Self::Luminance => 1,
            Self::Rgb => 3,
        }
    }
}

/// An 8-bit-per-channel pixel buffer, row-major and channel-interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalImage {
    mode: ColorMode,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CanonicalImage {
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Channel values of the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.mode.channels();
        let start = (y as usize * self.width as usize + x as usize) * channels;
        self.pixels.get(start..start + channels)
    }

    /// Wrap the buffer as an `image` crate image for encoding.
    pub fn to_dynamic(&self) -> Result<DynamicImage> {
        let pixels = self.pixels.clone();
        let image = match self.mode {
            ColorMode::Luminance => {
                GrayImage::from_raw(self.width, self.height, pixels).map(DynamicImage::ImageLuma8)
            }
            ColorMode::Rgb => {
                RgbImage::from_raw(self.width, self.height, pixels).map(DynamicImage::ImageRgb8)
            }
        };
        image.ok_or_else(|| {
            PixtralError::InvalidArgument(format!(
                "pixel buffer does not fit a {}x{} {} image",
                self.width, self.height, self.mode
            ))
        })
    }
}

/// Normalize a raw tensor into a luminance or RGB canonical image.
///
/// 1. Leading singleton axes are dropped while the rank exceeds 3.
/// 2. Channels-first input is transposed to channels-last.
/// 3. 1 channel maps to luminance, 3 to RGB, and 4 to RGB with the alpha
///    channel discarded (no blending against a background).
/// 4. Values are scaled by 255 and rounded; the cast saturates at 0 and 255.
///
/// # Errors
///
/// Returns [`PixtralError::UnsupportedImageShape`] for any other rank or
/// channel count, and for images with an empty spatial axis.
pub fn normalize(image: &RawImage) -> Result<CanonicalImage> {
    let unsupported = || PixtralError::UnsupportedImageShape {
        shape: image.shape().to_vec(),
    };

    let mut view = image.view();
    while view.ndim() > 3 && view.shape()[0] == 1 {
        view = view.index_axis_move(Axis(0), 0);
    }

    let layout = resolve_layout(view.shape()).ok_or_else(unsupported)?;
    if layout == ImageLayout::ChannelsFirst {
        view = view.permuted_axes(IxDyn(&[1, 2, 0]));
    }

    let shape = view.shape().to_vec();
    let (mode, plane): (ColorMode, ArrayViewD<'_, f32>) = match shape.as_slice() {
        [_, _] => (ColorMode::Luminance, view),
        [_, _, 1] => (ColorMode::Luminance, view.index_axis_move(Axis(2), 0)),
        [_, _, 3] => (ColorMode::Rgb, view),
        [_, _, 4] => (
            ColorMode::Rgb,
            view.slice_axis_move(Axis(2), Slice::from(0..3)),
        ),
        _ => return Err(unsupported()),
    };

    let (height, width) = (plane.shape()[0], plane.shape()[1]);
    if height == 0 || width == 0 {
        return Err(unsupported());
    }
    let height = u32::try_from(height).map_err(|_| unsupported())?;
    let width = u32::try_from(width).map_err(|_| unsupported())?;

    let pixels = plane.iter().copied().map(to_u8).collect();

    debug!(
        shape = ?image.shape(),
        %layout,
        %mode,
        width,
        height,
        "normalized image"
    );

    Ok(CanonicalImage {
        mode,
        width,
        height,
        pixels,
    })
}

/// Scale a [0, 1] float to a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(value: f32) -> u8 {
    // `as` saturates out-of-range values and maps NaN to 0
    (value * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_u8_rounds_and_saturates() {
        assert_eq!(to_u8(0.0), 0);
        assert_eq!(to_u8(1.0), 255);
        assert_eq!(to_u8(0.5), 128);
        assert_eq!(to_u8(-0.3), 0);
        assert_eq!(to_u8(1.7), 255);
        assert_eq!(to_u8(f32::NAN), 0);
    }

    #[test]
    fn channels_first_values_land_in_the_right_pixels() {
        // (3, 1, 2): red plane all 1.0, green plane 0.0, blue plane [0.0, 1.0]
        let raw = RawImage::from_shape_vec(&[3, 1, 2], vec![1.0, 1.0, 0.0, 0.0, 0.0, 1.0])
            .unwrap();
        let canonical = normalize(&raw).unwrap();

        assert_eq!(canonical.mode(), ColorMode::Rgb);
        assert_eq!((canonical.width(), canonical.height()), (2, 1));
        assert_eq!(canonical.pixel(0, 0), Some(&[255, 0, 0][..]));
        assert_eq!(canonical.pixel(1, 0), Some(&[255, 0, 255][..]));
    }

    #[test]
    fn alpha_channel_is_dropped_not_blended() {
        let raw = RawImage::from_shape_vec(&[5, 1, 4], [0.2, 0.4, 0.6, 0.0].repeat(5))
            .unwrap();
        let canonical = normalize(&raw).unwrap();

        assert_eq!(canonical.mode(), ColorMode::Rgb);
        assert_eq!(canonical.pixel(0, 2), Some(&[51, 102, 153][..]));
    }

    #[test]
    fn batch_of_one_axis_is_dropped() {
        let raw = RawImage::filled(&[1, 6, 9, 3], 0.5);
        let canonical = normalize(&raw).unwrap();

        assert_eq!(canonical.mode(), ColorMode::Rgb);
        assert_eq!((canonical.width(), canonical.height()), (9, 6));
    }

    #[test]
    fn empty_spatial_axis_is_rejected() {
        let raw = RawImage::filled(&[0, 7], 0.5);
        assert!(matches!(
            normalize(&raw),
            Err(PixtralError::UnsupportedImageShape { shape }) if shape == vec![0, 7]
        ));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let canonical = normalize(&RawImage::filled(&[2, 2], 0.0)).unwrap();
        assert_eq!(canonical.pixel(2, 0), None);
    }
}
