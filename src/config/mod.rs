//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `DIFY_RELAY` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use dify_relay::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Listening on {}", config.server.socket_addr());
//! ```

mod dify;
mod error;
mod line;
mod server;

pub use dify::DifyConfig;
pub use error::{ConfigError, ValidationError};
pub use line::LineConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, debug flag)
    #[serde(default)]
    pub server: ServerConfig,

    /// LINE Messaging API configuration (tokens, channel secret)
    pub line: LineConfig,

    /// Dify API configuration (key, base URL, timeout)
    pub dify: DifyConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DIFY_RELAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `DIFY_RELAY__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `DIFY_RELAY__DIFY__API_KEY=...` -> `dify.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DIFY_RELAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.line.validate()?;
        self.dify.validate()?;
        Ok(())
    }
}
