//! Dify API configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Dify chat-completion API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DifyConfig {
    /// API key for authentication
    pub api_key: Secret<String>,

    /// Base URL for the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl DifyConfig {
    /// Exposes the API key (for making requests).
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate Dify configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key().is_empty() {
            return Err(ValidationError::MissingRequired("dify.api_key"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidDifyBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.dify.ai/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}
