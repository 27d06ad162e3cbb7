//! Configuration (code > env > defaults).

use std::fmt;
use std::time::Duration;

use crate::error::{PixtralError, Result};
use crate::provider::mistral::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Endpoint and transport settings shared by every call.
///
/// The optional API key is only a fallback for front ends such as the CLI;
/// node invocations always pass their own credential.
#[derive(Clone)]
pub struct BridgeConfig {
    base_url: String,
    timeout: Duration,
    api_key: Option<String>,
}

impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_key: None,
        }
    }

    /// Load from environment variables (MISTRAL_API_KEY, MISTRAL_BASE_URL,
    /// PIXTRAL_TIMEOUT_SECS), reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::new();

        if let Some(key) = lookup("MISTRAL_API_KEY").filter(|k| !k.is_empty()) {
            config.api_key = Some(key);
        }
        if let Some(url) = lookup("MISTRAL_BASE_URL").filter(|u| !u.is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = lookup("PIXTRAL_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                PixtralError::Configuration(format!("PIXTRAL_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            if secs == 0 {
                return Err(PixtralError::Configuration(
                    "PIXTRAL_TIMEOUT_SECS must be positive".into(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
