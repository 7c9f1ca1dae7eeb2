//! Configuration management for the contact cards front end.
//!
//! Settings come from environment variables, with an optional `.env` file
//! loaded first. Every setting has a default so the binary runs against a
//! local API with no configuration at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default API base URL (local development server).
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Configuration for the contact cards front end.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cards API base URL
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Re-fetch the contact list after a successful create (default: false)
    pub refresh_after_create: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CARDS_API_BASE_URL`: Base URL for the cards API (default: `http://localhost:3000`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `REFRESH_AFTER_CREATE`: `true`/`false` (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_base_url =
            env::var("CARDS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CARDS_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let refresh_after_create = Self::parse_env_bool("REFRESH_AFTER_CREATE", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            request_timeout,
            refresh_after_create,
            log_level,
        })
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

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: 10,
            refresh_after_create: false,
            log_level: "error".to_string(),
        }
    }
}
