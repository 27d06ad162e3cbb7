//! Image tensors, normalization, and data-URI encoding.

mod encode;
mod layout;
mod load;
mod normalize;

pub use encode::{encode_image, encode_jpeg, EncodedImage, JPEG_DATA_URI_PREFIX, JPEG_QUALITY};
pub use layout::{resolve_layout, ImageLayout};
pub use load::load_image;
pub use normalize::{normalize, CanonicalImage, ColorMode};

use ndarray::{ArrayD, ArrayViewD, IxDyn};

use crate::error::{PixtralError, Result};

/// Maximum number of images accepted in one batch or one request.
pub const MAX_IMAGES: usize = 30;

/// A raw image tensor with float pixel values in [0.0, 1.0].
///
/// Accepted shapes are (H, W), (H, W, C) and (C, H, W) with C in {1, 3, 4}.
/// Leading batch-of-one axes, as produced by most host runtimes, are tolerated.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
    data: ArrayD<f32>,
}

impl RawImage {
    pub fn new(data: ArrayD<f32>) -> Self {
        Self { data }
    }

    /// Build an image from a shape and row-major pixel values.
    pub fn from_shape_vec(shape: &[usize], values: Vec<f32>) -> Result<Self> {
        let data = ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|e| {
            PixtralError::InvalidArgument(format!("image data does not match shape {shape:?}: {e}"))
        })?;
        Ok(Self { data })
    }

    /// An image of the given shape with every value set to `value`.
    pub fn filled(shape: &[usize], value: f32) -> Self {
        Self {
            data: ArrayD::from_elem(IxDyn(shape), value),
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn view(&self) -> ArrayViewD<'_, f32> {
        self.data.view()
    }

    pub fn as_array(&self) -> &ArrayD<f32> {
        &self.data
    }

    pub fn into_array(self) -> ArrayD<f32> {
        self.data
    }
}

impl From<ArrayD<f32>> for RawImage {
    fn from(data: ArrayD<f32>) -> Self {
        Self::new(data)
    }
}
