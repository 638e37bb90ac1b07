//! Authentication service configuration types

use crate::{parse_env, ConfigError, ConfigResult};
use std::env;

/// External authentication / user-management service configuration
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Base URL of the auth service (e.g., http://localhost:3001/api/v1)
    pub url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl AuthServiceConfig {
    /// Load auth service configuration from environment variables
    ///
    /// Returns `Ok(None)` when `AUTH_URL` is unset or blank. Resolvers that
    /// need the service report a configuration error per request instead of
    /// the server refusing to start.
    pub fn from_env() -> ConfigResult<Option<Self>> {
        let url = match env::var("AUTH_URL") {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => return Ok(None),
        };

        Self::validate_url(&url)?;

        Ok(Some(Self {
            url,
            timeout_secs: parse_env("AUTH_SERVICE_TIMEOUT", 10)?,
            connect_timeout_secs: parse_env("AUTH_SERVICE_CONNECT_TIMEOUT", 5)?,
        }))
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }

    /// Get the full URL for an endpoint path on the auth service
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn validate_url(raw: &str) -> ConfigResult<()> {
        let parsed = url::Url::parse(raw)
            .map_err(|e| ConfigError::InvalidUrl("AUTH_URL".to_string(), e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidUrl(
                "AUTH_URL".to_string(),
                format!("unsupported scheme '{}'", other),
            )),
        }
    }
}
