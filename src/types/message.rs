//! Chat message and request types sent to the vision model.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::image::EncodedImage;

use super::GenerationSettings;

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single part of message content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: EncodedImage },
}

/// A message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl ChatMessage {
    /// A user message: the prompt first, then one part per image in order.
    pub fn user_with_images(prompt: impl Into<String>, images: Vec<EncodedImage>) -> Self {
        let mut content = Vec::with_capacity(images.len() + 1);
        content.push(ContentPart::Text {
            text: prompt.into(),
        });
        content.extend(
            images
                .into_iter()
                .map(|image_url| ContentPart::ImageUrl { image_url }),
        );
        Self {
            role: Role::User,
            content,
        }
    }

    /// Extract the text content, concatenating all text parts.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                ContentPart::ImageUrl { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// Image parts, in order.
    pub fn images(&self) -> impl Iterator<Item = &EncodedImage> {
        self.content.iter().filter_map(|part| match part {
            ContentPart::ImageUrl { image_url } => Some(image_url),
            ContentPart::Text { .. } => None,
        })
    }
}

/// Body of a chat-completions call. Built once per invocation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, message: ChatMessage, settings: &GenerationSettings) -> Self {
        Self {
            model: model.into(),
            messages: vec![message],
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            top_p: settings.top_p,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn top_p(&self) -> f64 {
        self.top_p
    }

    /// Number of image parts across all messages.
    pub fn image_count(&self) -> usize {
        self.messages.iter().map(|m| m.images().count()).sum()
    }
}
