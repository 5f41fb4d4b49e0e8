//! # Application Configuration
//!
//! Loaded from environment variables once at startup and validated so a
//! misconfigured desk fails before opening a window.
//!
//! | Variable            | Default                      |
//! |---------------------|------------------------------|
//! | `BOOKING_API_URL`   | `http://127.0.0.1:8000/api`  |
//! | `BOOKING_DEMO_DATA` | `0` (`1` = in-memory fixtures) |

use std::env;

use crate::core::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Desk configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeskConfig {
    /// Base address every endpoint path is appended to, without trailing `/`
    pub api_base_url: String,

    /// Serve fixtures from [`crate::services::demo::DemoApi`] instead of the REST API.
    ///
    /// Only ever enabled explicitly; a failing backend never switches to it.
    pub demo_data: bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            demo_data: false,
        }
    }
}

impl DeskConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("BOOKING_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let demo_data = env::var("BOOKING_DEMO_DATA")
            .map(|v| v == "1")
            .unwrap_or(false);

        let config = Self::new(api_base_url, demo_data);
        config.validate()?;
        Ok(config)
    }

    pub fn new(api_base_url: impl Into<String>, demo_data: bool) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            demo_data,
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "BOOKING_API_URL must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = DeskConfig::new("http://localhost:8000/api/", false);
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_default_is_valid() {
        assert!(DeskConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let config = DeskConfig::new("localhost:8000", false);
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
