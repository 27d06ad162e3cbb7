//! Mistral chat-completions provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::BridgeConfig;
use crate::error::PixtralError;
use crate::types::{ChatRequest, FinishReason, Usage};
use crate::util::timeout::with_timeout;

use super::http::{bearer_headers, shared_client};
use super::{ChatCompletion, ChatProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";

/// Upper bound on one request/response round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub struct MistralProvider {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl MistralProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Provider for one call, with endpoint and timeout taken from `config`.
    pub fn from_config(api_key: String, config: &BridgeConfig) -> Self {
        Self::new(api_key, Some(config.base_url().to_string())).with_timeout(config.timeout())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the chat-completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatCompletion, PixtralError> {
        info!(
            model = request.model(),
            images = request.image_count(),
            "Sending request to Mistral API"
        );

        let headers = bearer_headers(&self.api_key)?;
        let resp = shared_client()?
            .post(self.endpoint())
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        if status != 200 {
            warn!(status, "Mistral API returned an error");
            return Err(PixtralError::api(status, body));
        }

        let data: MistralChatResponse = serde_json::from_str(&body)?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| {
                PixtralError::InvalidResponse("no choices in Mistral response".to_string())
            })?;

        let usage = data
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();
        let finish_reason = choice
            .finish_reason
            .as_deref()
            .and_then(|s| s.parse::<FinishReason>().ok());

        debug!(?usage, ?finish_reason, "Received successful response from Mistral API");

        Ok(ChatCompletion {
            text: choice.message.content.unwrap_or_default(),
            usage,
            finish_reason,
        })
    }
}

#[async_trait]
impl ChatProvider for MistralProvider {
    fn provider_name(&self) -> &str {
        "mistral"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, PixtralError> {
        with_timeout(self.timeout, self.send(request)).await
    }
}

// Mistral API response types (internal)

#[derive(Deserialize)]
struct MistralChatResponse {
    choices: Vec<MistralChoice>,
    usage: Option<MistralUsage>,
}

#[derive(Deserialize)]
struct MistralChoice {
    message: MistralMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct MistralMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct MistralUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
