//! Composition of optional image slots into one ordered batch.

use ndarray::{ArrayD, Axis};
use tracing::debug;

use crate::error::{PixtralError, Result};
use crate::image::{RawImage, MAX_IMAGES};

/// Minimum number of images in a composed batch.
pub const MIN_BATCH_IMAGES: usize = 2;

/// Images stacked along a new leading batch axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBatch {
    data: ArrayD<f32>,
}

impl ImageBatch {
    /// Stack images along the batch axis, keeping their order.
    ///
    /// # Errors
    ///
    /// Fails with [`PixtralError::InsufficientImages`] or
    /// [`PixtralError::TooManyImages`] outside `2..=30` images, and with
    /// [`PixtralError::IncompatibleImageShapes`] when shapes differ.
    pub fn from_images(images: Vec<RawImage>) -> Result<Self> {
        check_cardinality(images.len())?;

        let expected = images[0].shape().to_vec();
        if let Some(other) = images.iter().find(|img| img.shape() != expected.as_slice()) {
            return Err(PixtralError::IncompatibleImageShapes {
                expected,
                actual: other.shape().to_vec(),
            });
        }

        let views: Vec<_> = images.iter().map(RawImage::view).collect();
        let data = ndarray::stack(Axis(0), &views)?;

        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape of each image in the batch.
    pub fn image_shape(&self) -> &[usize] {
        &self.data.shape()[1..]
    }

    /// Copy out the image at `index` (0-based).
    pub fn get(&self, index: usize) -> Option<RawImage> {
        (index < self.len()).then(|| RawImage::new(self.data.index_axis(Axis(0), index).to_owned()))
    }

    /// Copy out every image, in batch order.
    pub fn images(&self) -> Vec<RawImage> {
        self.data
            .axis_iter(Axis(0))
            .map(|view| RawImage::new(view.to_owned()))
            .collect()
    }

    pub fn as_array(&self) -> &ArrayD<f32> {
        &self.data
    }

    pub fn into_array(self) -> ArrayD<f32> {
        self.data
    }
}

fn check_cardinality(count: usize) -> Result<()> {
    if count < MIN_BATCH_IMAGES {
        return Err(PixtralError::InsufficientImages(count));
    }
    if count > MAX_IMAGES {
        return Err(PixtralError::TooManyImages(count));
    }
    Ok(())
}

/// Collect slots `1..=input_count` and stack the present images.
///
/// `slots[i - 1]` holds slot `i`; indices past the end of `slots` count as
/// unwired. Absent slots are skipped and the remaining images keep
/// ascending slot order.
pub fn compose_batch(input_count: usize, slots: &[Option<RawImage>]) -> Result<ImageBatch> {
    let images: Vec<RawImage> = (1..=input_count)
        .filter_map(|index| slots.get(index - 1).and_then(Option::as_ref))
        .cloned()
        .collect();

    debug!(
        input_count,
        collected = images.len(),
        "composing image batch"
    );

    check_cardinality(images.len())?;
    ImageBatch::from_images(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(value: f32) -> RawImage {
        RawImage::filled(&[4, 4], value)
    }

    #[test]
    fn missing_slot_is_skipped() {
        let slots = vec![Some(gray(0.1)), None, Some(gray(0.3))];
        let batch = compose_batch(3, &slots).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.get(0), Some(gray(0.1)));
        assert_eq!(batch.get(1), Some(gray(0.3)));
        assert_eq!(batch.get(2), None);
    }

    #[test]
    fn input_count_limits_collected_slots() {
        let slots = vec![Some(gray(0.1)), Some(gray(0.2)), Some(gray(0.3))];
        let batch = compose_batch(2, &slots).unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn single_image_is_insufficient() {
        let slots = vec![Some(gray(0.1)), None];
        assert!(matches!(
            compose_batch(2, &slots),
            Err(PixtralError::InsufficientImages(1))
        ));
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let slots = vec![Some(gray(0.1)), Some(RawImage::filled(&[4, 5], 0.1))];
        match compose_batch(2, &slots) {
            Err(PixtralError::IncompatibleImageShapes { expected, actual }) => {
                assert_eq!(expected, vec![4, 4]);
                assert_eq!(actual, vec![4, 5]);
            }
            other => panic!("expected IncompatibleImageShapes, got {other:?}"),
        }
    }

    #[test]
    fn batch_shape_has_leading_axis() {
        let images = vec![RawImage::filled(&[2, 3, 3], 0.5); 3];
        let batch = ImageBatch::from_images(images).unwrap();
        assert_eq!(batch.as_array().shape(), &[3, 2, 3, 3]);
        assert_eq!(batch.image_shape(), &[2, 3, 3]);
        assert_eq!(batch.images().len(), 3);
    }
}
