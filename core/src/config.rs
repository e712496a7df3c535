//! Provider configuration.
//!
//! The only setting is the API endpoint. An explicit value wins, even when
//! empty; otherwise `BOOTCAMP_API_ENDPOINT` is consulted. Nothing left after
//! both is a configuration error, raised before any client exists.

use serde::Deserialize;

use crate::error::ApiError;

/// Environment variable consulted when no endpoint is configured.
pub const ENDPOINT_ENV: &str = "BOOTCAMP_API_ENDPOINT";

/// Provider block as supplied by the host, e.g. `{"endpoint": "http://localhost:8080"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl ProviderConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
        }
    }

    /// Parse the host's raw JSON configuration.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ApiError> {
        serde_json::from_value(value)
            .map_err(|e| ApiError::Configuration(format!("invalid provider configuration: {e}")))
    }

    /// Resolve against the process environment.
    pub fn resolve_endpoint(&self) -> Result<String, ApiError> {
        self.resolve_endpoint_with(std::env::var(ENDPOINT_ENV).ok())
    }

    /// Resolve against an explicitly supplied environment value.
    pub fn resolve_endpoint_with(&self, env_value: Option<String>) -> Result<String, ApiError> {
        let endpoint = match &self.endpoint {
            Some(explicit) => explicit.clone(),
            None => env_value.unwrap_or_default(),
        };
        if endpoint.trim().is_empty() {
            return Err(ApiError::Configuration(format!(
                "missing or empty Bootcamp API endpoint; set `endpoint` or {ENDPOINT_ENV}"
            )));
        }
        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_endpoint_wins_over_env() {
        let config = ProviderConfig::with_endpoint("http://api.internal:8080");
        let endpoint = config
            .resolve_endpoint_with(Some("http://localhost:8080".to_string()))
            .unwrap();
        assert_eq!(endpoint, "http://api.internal:8080");
    }

    #[test]
    fn env_is_the_fallback() {
        let endpoint = ProviderConfig::default()
            .resolve_endpoint_with(Some("http://localhost:8080".to_string()))
            .unwrap();
        assert_eq!(endpoint, "http://localhost:8080");
    }

    #[test]
    fn missing_everywhere_is_a_configuration_error() {
        let err = ProviderConfig::default()
            .resolve_endpoint_with(None)
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
        assert!(err.to_string().contains(ENDPOINT_ENV));
    }

    #[test]
    fn explicit_empty_value_does_not_fall_back() {
        let err = ProviderConfig::with_endpoint("")
            .resolve_endpoint_with(Some("http://localhost:8080".to_string()))
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn from_json_accepts_null_and_missing() {
        let config = ProviderConfig::from_json(serde_json::json!({})).unwrap();
        assert_eq!(config.endpoint, None);
        let config = ProviderConfig::from_json(serde_json::json!({"endpoint": null})).unwrap();
        assert_eq!(config.endpoint, None);
        let config =
            ProviderConfig::from_json(serde_json::json!({"endpoint": "http://h:1"})).unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("http://h:1"));
    }

    #[test]
    fn from_json_rejects_wrong_type() {
        let err = ProviderConfig::from_json(serde_json::json!({"endpoint": 8080})).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }
}
