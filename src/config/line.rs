//! LINE Messaging API configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// LINE Messaging API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LineConfig {
    /// Channel access token used to call the reply API
    pub channel_access_token: Secret<String>,

    /// Channel secret used to verify webhook signatures
    pub channel_secret: Secret<String>,

    /// Base URL for the Messaging API
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl LineConfig {
    /// Exposes the channel access token (for making requests).
    pub fn channel_access_token(&self) -> &str {
        self.channel_access_token.expose_secret()
    }

    /// Exposes the channel secret (for signature verification).
    pub fn channel_secret(&self) -> &str {
        self.channel_secret.expose_secret()
    }

    /// Validate LINE configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.channel_access_token().is_empty() {
            return Err(ValidationError::MissingRequired(
                "line.channel_access_token",
            ));
        }
        if self.channel_secret().is_empty() {
            return Err(ValidationError::MissingRequired("line.channel_secret"));
        }
        Ok(())
    }
}

fn default_api_base() -> String {
    "https://api.line.me".to_string()
}
