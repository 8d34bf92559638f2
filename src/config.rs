//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::services::location::AcquireOptions;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the scheduling API, including the version prefix.
    pub api_base_url: String,
    /// Ask the sensor for a high-accuracy fix.
    pub locate_high_accuracy: bool,
    /// Location acquisition timeout in milliseconds.
    pub locate_timeout_ms: u64,
    /// Oldest cached fix the sensor may serve, in milliseconds.
    pub locate_max_age_ms: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api/v1".to_string(),
            locate_high_accuracy: true,
            locate_timeout_ms: 15_000,
            locate_max_age_ms: 30_000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the API base URL is required; location options fall back to
    /// the defaults baked into `AcquireOptions`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_base_url: env::var("CARESHIFT_API_BASE_URL")
                .map_err(|_| ConfigError::Missing("CARESHIFT_API_BASE_URL"))?,
            locate_high_accuracy: env::var("CARESHIFT_LOCATE_HIGH_ACCURACY")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
            locate_timeout_ms: env::var("CARESHIFT_LOCATE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15_000),
            locate_max_age_ms: env::var("CARESHIFT_LOCATE_MAX_AGE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
        })
    }

    /// Location options derived from this configuration.
    pub fn acquire_options(&self) -> AcquireOptions {
        AcquireOptions {
            high_accuracy: self.locate_high_accuracy,
            timeout: Duration::from_millis(self.locate_timeout_ms),
            maximum_age: Duration::from_millis(self.locate_max_age_ms),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
