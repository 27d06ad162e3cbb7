//! Vision chat request assembly and dispatch.

use tracing::debug;

use crate::error::{PixtralError, Result};
use crate::image::{encode_image, RawImage, MAX_IMAGES};
use crate::provider::ChatProvider;
use crate::types::{ChatMessage, ChatRequest, GenerationSettings};

/// Build the chat request for a prompt and its images.
///
/// The image count is checked before any image is encoded. A single image
/// that fails to normalize aborts the whole request.
pub fn build_chat_request(
    model: &str,
    prompt: &str,
    images: &[RawImage],
    settings: &GenerationSettings,
) -> Result<ChatRequest> {
    if images.len() > MAX_IMAGES {
        return Err(PixtralError::TooManyImages(images.len()));
    }
    settings.validate()?;

    let encoded = images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            debug!(index, shape = ?image.shape(), "Processing image");
            encode_image(image)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ChatRequest::new(
        model,
        ChatMessage::user_with_images(prompt, encoded),
        settings,
    ))
}

/// Ask the model about `images` and return its reply text.
pub async fn describe_images(
    provider: &dyn ChatProvider,
    model: &str,
    prompt: &str,
    images: &[RawImage],
    settings: &GenerationSettings,
) -> Result<String> {
    let request = build_chat_request(model, prompt, images, settings)?;

    debug!(
        provider = provider.provider_name(),
        model,
        images = request.image_count(),
        "describe_images: calling provider"
    );
    let completion = provider.complete(&request).await?;

    Ok(completion.text)
}
