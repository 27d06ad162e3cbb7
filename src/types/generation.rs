//! Generation settings and related enums.

use std::ops::RangeInclusive;

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{PixtralError, Result};

/// Model used when the caller does not name one.
pub const DEFAULT_MODEL: &str = "pixtral-12b-2409";

/// Prompt used when the caller does not supply one.
pub const DEFAULT_PROMPT: &str = "Describe the image";

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=1.5;
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 1..=32_768;
pub const TOP_P_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Sampling parameters for one chat completion.
#[derive(Debug, Clone, Copy, Builder, Serialize, Deserialize, PartialEq)]
pub struct GenerationSettings {
    #[builder(default = 0.7)]
    pub temperature: f64,
    #[builder(default = 4096)]
    pub max_tokens: u32,
    #[builder(default = 1.0)]
    pub top_p: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GenerationSettings {
    /// Check every parameter against its documented range.
    ///
    /// Host schemas normally enforce these ranges, but they can be bypassed.
    pub fn validate(&self) -> Result<()> {
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(PixtralError::InvalidArgument(format!(
                "temperature {} outside {TEMPERATURE_RANGE:?}",
                self.temperature
            )));
        }
        if !MAX_TOKENS_RANGE.contains(&self.max_tokens) {
            return Err(PixtralError::InvalidArgument(format!(
                "max_tokens {} outside {MAX_TOKENS_RANGE:?}",
                self.max_tokens
            )));
        }
        if !TOP_P_RANGE.contains(&self.top_p) {
            return Err(PixtralError::InvalidArgument(format!(
                "top_p {} outside {TOP_P_RANGE:?}",
                self.top_p
            )));
        }
        Ok(())
    }
}

/// Why generation finished.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ModelLength,
    ToolCalls,
    Error,
}
