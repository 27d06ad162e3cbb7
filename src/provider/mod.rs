//! Chat provider trait and the Mistral implementation.

pub mod http;
pub mod mistral;

pub use mistral::MistralProvider;

use async_trait::async_trait;

use crate::error::PixtralError;
use crate::types::{ChatRequest, FinishReason, Usage};

/// A completed chat response.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    pub text: String,
    pub usage: Usage,
    pub finish_reason: Option<FinishReason>,
}

/// Core trait implemented by chat-completion backends.
///
/// This is the only place a request leaves the process, so tests substitute
/// their own implementation here.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name (e.g., "mistral").
    fn provider_name(&self) -> &str;

    /// Send one request and return the first choice.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, PixtralError>;
}
