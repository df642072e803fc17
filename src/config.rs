//! Application configuration constants
//!
//! Centralized configuration for the renewal dashboard client.

use serde::{Deserialize, Serialize};

/// Backend base URL used when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable that overrides the backend base URL
pub const API_BASE_URL_ENV: &str = "RENEWAL_DESK_API_URL";

/// Mobile numbers must be exactly this many digits
pub const MOBILE_DIGITS: usize = 10;

/// Timeout for backend requests, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Explicit configuration object passed to the API client.
///
/// Constructed once at startup and injected wherever needed, never read
/// from ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Build a config from the environment, falling back to the default URL
    pub fn from_env() -> Self {
        let api_base_url = std::env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self { api_base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_set() {
        let config = Config::default();
        assert!(!config.api_base_url.is_empty());
        assert!(config.api_base_url.starts_with("http"));
    }

    #[test]
    fn test_mobile_digits_is_ten() {
        assert_eq!(MOBILE_DIGITS, 10);
    }

    #[test]
    fn test_timeout_is_reasonable() {
        assert!(REQUEST_TIMEOUT_SECS > 0);
        assert!(REQUEST_TIMEOUT_SECS <= 120);
    }
}
