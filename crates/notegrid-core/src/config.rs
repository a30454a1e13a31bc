//! Client configuration for reaching the notes API.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::util::{is_http_url, normalize_text_option};

/// Base URL used when nothing else is configured (local development server).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";

/// Where the notes API lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Builds a config for an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Ok(Self {
            base_url: normalize_base_url(&base_url.into())?,
        })
    }

    /// Builds a config from an optional override, falling back to the default
    /// local server when the override is missing or blank.
    pub fn from_override(base_url: Option<String>) -> ApiResult<Self> {
        normalize_text_option(base_url).map_or_else(|| Ok(Self::default()), Self::new)
    }

    /// Absolute URL for an API route such as `/api/note/allNotes`.
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}

/// Trim whitespace and trailing slashes, and require an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(&base) {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("example.com").is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url(" https://api.example.com/ ").unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn from_override_falls_back_to_local_server() {
        assert_eq!(ApiConfig::from_override(None).unwrap(), ApiConfig::default());
        assert_eq!(
            ApiConfig::from_override(Some("  ".to_string())).unwrap(),
            ApiConfig::default()
        );
        assert_eq!(
            ApiConfig::from_override(Some("https://notes.example.com/".to_string()))
                .unwrap()
                .base_url,
            "https://notes.example.com"
        );
    }

    #[test]
    fn endpoint_joins_route() {
        let config = ApiConfig::default();
        assert_eq!(
            config.endpoint("/api/note/allNotes"),
            "http://localhost:5001/api/note/allNotes"
        );
    }
}
