//! The multi-image input node.

use crate::batch::{compose_batch, ImageBatch, MIN_BATCH_IMAGES};
use crate::error::{PixtralError, Result};
use crate::image::{RawImage, MAX_IMAGES};

/// Combine up to `input_count` optional image slots into one batch.
///
/// `input_count` is the node's configured number of inputs and must lie in
/// `2..=30`. Errors are returned to the caller, not flattened.
pub fn combine_images(input_count: usize, slots: &[Option<RawImage>]) -> Result<ImageBatch> {
    if !(MIN_BATCH_IMAGES..=MAX_IMAGES).contains(&input_count) {
        return Err(PixtralError::InvalidArgument(format!(
            "inputcount must be between {MIN_BATCH_IMAGES} and {MAX_IMAGES}, got {input_count}"
        )));
    }
    compose_batch(input_count, slots)
}
