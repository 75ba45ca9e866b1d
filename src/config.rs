//! Configuration management for the contact book client.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Base URL used when `CONTACTBOOK_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Quiet period before a search input is resolved.
pub const DEFAULT_DEBOUNCE_MS: u64 = 1200;

/// Configuration for the contact book client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact book API base URL
    pub api_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Search debounce delay in milliseconds (default: 1200)
    pub search_debounce_ms: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTBOOK_API_URL`: Base URL for the API (default: `http://127.0.0.1:8000`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `SEARCH_DEBOUNCE_MS`: Search debounce delay (default: 1200)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let api_url = env::var("CONTACTBOOK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTBOOK_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let search_debounce_ms = Self::parse_env_u64("SEARCH_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS)?;

        if search_debounce_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_DEBOUNCE_MS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_url,
            request_timeout,
            search_debounce_ms,
            log_level,
        })
    }

    /// The debounce delay as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: 10,
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_level: "error".to_string(),
        }
    }
}
