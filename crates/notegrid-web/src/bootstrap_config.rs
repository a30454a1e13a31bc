//! Web bootstrap configuration loaded from build-time generated JSON.

use notegrid_core::{ApiClient, ApiConfig, ApiResult};
use serde::{Deserialize, Serialize};

/// Build-provisioned settings embedded into the web bundle.
///
/// Only public values belong here; the bundle is shipped to every browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebBootstrapConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
}

/// Loads the generated bootstrap JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns a default config that
/// points at the local development server.
pub fn load_bootstrap_config() -> WebBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/web-bootstrap.json"));
    parse_bootstrap_config(raw)
}

fn parse_bootstrap_config(raw: &str) -> WebBootstrapConfig {
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse web bootstrap config: {}", error);
        WebBootstrapConfig::default()
    })
}

impl WebBootstrapConfig {
    /// Notes API location, falling back to the local server when the embedded
    /// base URL is missing or unusable.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::from_override(self.api_base_url.clone()).unwrap_or_else(|error| {
            tracing::warn!("Ignoring configured API base URL: {}", error);
            ApiConfig::default()
        })
    }
}

/// Builds the shared notes API client for this bundle.
pub fn build_api_client(config: &WebBootstrapConfig) -> ApiResult<ApiClient> {
    let client = ApiClient::new(config.api_config())?;
    tracing::info!("Using notes API at {}", client.base_url());
    Ok(client)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_base_url_uses_local_server() {
        let config = WebBootstrapConfig::default();
        assert_eq!(config.api_config(), ApiConfig::default());
    }

    #[test]
    fn invalid_base_url_falls_back_to_local_server() {
        let config = WebBootstrapConfig {
            api_base_url: Some("notes.example.com".to_string()),
        };
        assert_eq!(config.api_config(), ApiConfig::default());
    }

    #[test]
    fn configured_base_url_is_normalized() {
        let config = parse_bootstrap_config(r#"{"api_base_url": "https://notes.example.com/"}"#);
        assert_eq!(config.api_config().base_url, "https://notes.example.com");
    }

    #[test]
    fn malformed_json_yields_default_config() {
        assert_eq!(parse_bootstrap_config("not json"), WebBootstrapConfig::default());
    }

    #[test]
    fn api_client_targets_configured_base_url() {
        let config = WebBootstrapConfig {
            api_base_url: Some("https://notes.example.com/".to_string()),
        };
        let client = build_api_client(&config).unwrap();
        assert_eq!(client.base_url(), "https://notes.example.com");
    }
}
