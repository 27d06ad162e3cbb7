//! Shared test helpers and capture provider.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use pixtral_bridge::error::PixtralError;
use pixtral_bridge::image::RawImage;
use pixtral_bridge::provider::{ChatCompletion, ChatProvider};
use pixtral_bridge::types::{ChatRequest, FinishReason, Usage};

/// A provider that records every request and returns a canned reply.
pub struct CaptureProvider {
    reply: String,
    requests: Mutex<Vec<ChatRequest>>,
}

impl CaptureProvider {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatProvider for CaptureProvider {
    fn provider_name(&self) -> &str {
        "capture"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, PixtralError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(ChatCompletion {
            text: self.reply.clone(),
            usage: Usage::default(),
            finish_reason: Some(FinishReason::Stop),
        })
    }
}

/// An RGB image of the given size with every channel set to `value`.
pub fn rgb(height: usize, width: usize, value: f32) -> RawImage {
    RawImage::filled(&[height, width, 3], value)
}

/// `count` identical 8x8 RGB images.
pub fn rgb_images(count: usize) -> Vec<RawImage> {
    vec![rgb(8, 8, 0.5); count]
}
