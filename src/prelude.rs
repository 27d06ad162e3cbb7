//! Convenience re-exports for common use.

pub use crate::batch::{compose_batch, ImageBatch};
pub use crate::config::BridgeConfig;
pub use crate::error::{PixtralError, Result};
pub use crate::image::{encode_image, normalize, EncodedImage, RawImage};
pub use crate::node::{combine_images, display_result, PixtralInputs, PixtralNode};
pub use crate::provider::{ChatProvider, MistralProvider};
pub use crate::types::{ChatRequest, ContentPart, GenerationSettings};
