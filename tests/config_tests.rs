//! Tests for configuration.

use std::collections::HashMap;
use std::time::Duration;

use pixtral_bridge::config::BridgeConfig;
use pixtral_bridge::error::PixtralError;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_point_at_mistral() {
    let config = BridgeConfig::new();
    assert_eq!(config.base_url(), "https://api.mistral.ai/v1");
    assert_eq!(config.timeout(), Duration::from_secs(60));
    assert_eq!(config.api_key(), None);
}

#[test]
fn lookup_overrides_defaults() {
    let config = BridgeConfig::from_lookup(lookup(&[
        ("MISTRAL_API_KEY", "sk-env"),
        ("MISTRAL_BASE_URL", "http://localhost:8080/v1"),
        ("PIXTRAL_TIMEOUT_SECS", "15"),
    ]))
    .unwrap();

    assert_eq!(config.api_key(), Some("sk-env"));
    assert_eq!(config.base_url(), "http://localhost:8080/v1");
    assert_eq!(config.timeout(), Duration::from_secs(15));
}

#[test]
fn empty_values_are_ignored() {
    let config =
        BridgeConfig::from_lookup(lookup(&[("MISTRAL_API_KEY", ""), ("MISTRAL_BASE_URL", "")]))
            .unwrap();
    assert_eq!(config.api_key(), None);
    assert_eq!(config.base_url(), "https://api.mistral.ai/v1");
}

#[test]
fn invalid_timeout_is_configuration_error() {
    for raw in ["soon", "0", "-3"] {
        assert!(matches!(
            BridgeConfig::from_lookup(lookup(&[("PIXTRAL_TIMEOUT_SECS", raw)])),
            Err(PixtralError::Configuration(_))
        ));
    }
}

#[test]
fn debug_output_hides_api_key() {
    let config = BridgeConfig::new().with_api_key("sk-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("sk-secret"));
}
