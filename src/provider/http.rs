//! Shared HTTP client and auth utilities.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{PixtralError, Result};

static SHARED_CLIENT: OnceLock<std::result::Result<reqwest::Client, String>> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// Timeouts are applied per call by the provider, not here. A client that
/// failed to build stays failed for the life of the process.
pub fn shared_client() -> Result<&'static reqwest::Client> {
    SHARED_CLIENT
        .get_or_init(|| {
            reqwest::Client::builder()
                .pool_max_idle_per_host(4)
                .build()
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| PixtralError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Build default headers for a Bearer-token API.
///
/// # Errors
///
/// Returns [`PixtralError::InvalidArgument`] if the key cannot be carried in
/// an HTTP header. The key itself is not echoed in the message.
pub fn bearer_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
        PixtralError::InvalidArgument("API key is not a valid HTTP header value".to_string())
    })?;
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}
