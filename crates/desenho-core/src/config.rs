//! Service configuration injected at startup.

use serde::Deserialize;
use thiserror::Error;

/// Image model used when none is configured.
pub const DEFAULT_MODEL: &str = "imagen-4.0-generate-001";

/// API root used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Errors in the startup configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key is not set")]
    MissingApiKey,

    #[error("Invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Generation service settings.
///
/// The API key is required; a config without one cannot be built. Only
/// `Deserialize` is derived so the key is never written back out.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Config {
    /// Config with the default model and endpoint.
    pub fn new(api_key: Option<&str>) -> Result<Self, ConfigError> {
        Self {
            api_key: api_key.unwrap_or_default().to_string(),
            model: default_model(),
            endpoint: default_endpoint(),
        }
        .validated()
    }

    /// Check a deserialized config: key present, endpoint a valid http(s) URL.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.api_key = self.api_key.trim().to_string();
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let endpoint = url::Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: "scheme must be http or https".to_string(),
            });
        }
        self.endpoint = self.endpoint.trim_end_matches('/').to_string();

        Ok(self)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// `<endpoint>/models/<model>:predict`
    pub fn predict_url(&self) -> String {
        format!("{}/models/{}:predict", self.endpoint, self.model)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() {
        assert_eq!(Config::new(None), Err(ConfigError::MissingApiKey));
        assert_eq!(Config::new(Some("  ")), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_defaults() {
        let config = Config::new(Some("secret")).unwrap();
        assert_eq!(config.api_key(), "secret");
        assert_eq!(
            config.predict_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/imagen-4.0-generate-001:predict"
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"api_key":"k"}"#).unwrap();
        let config = config.validated().unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_deserialize_without_key_fails_validation() {
        let config: Config = serde_json::from_str(r#"{"model":"m"}"#).unwrap();
        assert_eq!(config.validated(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_custom_endpoint_trailing_slash() {
        let config: Config =
            serde_json::from_str(r#"{"api_key":"k","endpoint":"http://localhost:8080/v1/","model":"m"}"#)
                .unwrap();
        let config = config.validated().unwrap();
        assert_eq!(config.predict_url(), "http://localhost:8080/v1/models/m:predict");
    }

    #[test]
    fn test_invalid_endpoint() {
        let config: Config =
            serde_json::from_str(r#"{"api_key":"k","endpoint":"not a url"}"#).unwrap();
        assert!(matches!(
            config.validated(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));

        let config: Config =
            serde_json::from_str(r#"{"api_key":"k","endpoint":"ftp://example.com"}"#).unwrap();
        assert!(matches!(
            config.validated(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::new(Some("secret")).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }
}
