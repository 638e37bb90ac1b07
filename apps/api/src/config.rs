//! API server configuration

use std::env;

use anyhow::{bail, Context, Result};
use cats_shared_config::{AuthServiceConfig, CommonConfig, DatabaseConfig, Environment};

/// Minimum required length for JWT_SECRET to be considered secure
const MIN_JWT_SECRET_LENGTH: usize = 32;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration (database, auth service, environment)
    pub common: CommonConfig,

    /// Server port (default: 3000)
    pub port: u16,

    /// Secret used to verify bearer tokens issued by the auth service.
    /// When unset every request is treated as anonymous.
    pub jwt_secret: Option<String>,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// In production mode, this function requires:
    /// - `JWT_SECRET`: Must be set and at least 32 characters long
    /// - `DATABASE_URL`: Must be explicitly set (no insecure defaults)
    ///
    /// `AUTH_URL` is never required at startup; resolvers that need it fail
    /// per request with a configuration error.
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load config")?;
        let is_production = common.environment.is_production();

        let jwt_secret = Self::load_jwt_secret(is_production)?;

        if is_production {
            Self::validate_database_url()?;
        }

        Ok(Self {
            common,

            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid PORT value")?,

            jwt_secret,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }

    /// Load and validate JWT_SECRET
    ///
    /// In production it must be set and at least MIN_JWT_SECRET_LENGTH
    /// characters. Elsewhere a missing secret disables authentication.
    fn load_jwt_secret(is_production: bool) -> Result<Option<String>> {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => {
                if is_production && secret.len() < MIN_JWT_SECRET_LENGTH {
                    bail!(
                        "JWT_SECRET must be at least {} characters in production (got {})",
                        MIN_JWT_SECRET_LENGTH,
                        secret.len()
                    );
                }
                Ok(Some(secret))
            }
            _ if is_production => {
                bail!(
                    "JWT_SECRET environment variable is required in production. \
                     Use the secret the auth service signs its tokens with."
                );
            }
            _ => Ok(None),
        }
    }

    /// Validate that DATABASE_URL is explicitly set in production
    fn validate_database_url() -> Result<()> {
        match env::var("DATABASE_URL") {
            Ok(url) if !url.is_empty() => Ok(()),
            _ => {
                bail!(
                    "DATABASE_URL environment variable is required in production. \
                     Please set your PostgreSQL connection string."
                );
            }
        }
    }

    // Convenience accessors for common config fields

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.common.database
    }

    /// Get auth service configuration (if configured)
    pub fn auth_service(&self) -> Option<&AuthServiceConfig> {
        self.common.auth_service.as_ref()
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Tracing filter directives
    pub fn log_level(&self) -> &str {
        &self.common.log_level
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_secret_required_in_production() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let err = Config::load_jwt_secret(true).unwrap_err().to_string();
            assert!(err.contains("JWT_SECRET"));
            assert!(err.contains("required in production"));
        });
    }

    #[test]
    fn test_jwt_secret_minimum_length_in_production() {
        temp_env::with_var("JWT_SECRET", Some("short"), || {
            let err = Config::load_jwt_secret(true).unwrap_err().to_string();
            assert!(err.contains("at least 32 characters"));
        });
    }

    #[test]
    fn test_jwt_secret_valid_in_production() {
        let secret = "a".repeat(MIN_JWT_SECRET_LENGTH);
        temp_env::with_var("JWT_SECRET", Some(secret.as_str()), || {
            assert_eq!(Config::load_jwt_secret(true).unwrap(), Some(secret.clone()));
        });
    }

    #[test]
    fn test_missing_jwt_secret_disables_auth_in_development() {
        temp_env::with_var_unset("JWT_SECRET", || {
            assert_eq!(Config::load_jwt_secret(false).unwrap(), None);
        });
    }

    #[test]
    fn test_database_url_required_in_production() {
        temp_env::with_var("DATABASE_URL", Some(""), || {
            let err = Config::validate_database_url().unwrap_err().to_string();
            assert!(err.contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", None::<&str>),
                ("PORT", None),
                ("JWT_SECRET", None),
                ("AUTH_URL", None),
                ("CORS_ORIGINS", Some("http://a.test, ,http://b.test")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.port, 3000);
                assert!(config.jwt_secret.is_none());
                assert!(config.auth_service().is_none());
                assert!(!config.is_production());
                assert_eq!(
                    config.cors_allowed_origins,
                    Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
                );
            },
        );
    }

    #[test]
    fn test_from_env_invalid_port() {
        temp_env::with_vars(
            [("PORT", Some("not-a-port")), ("ENVIRONMENT", None)],
            || {
                let err = Config::from_env().unwrap_err().to_string();
                assert!(err.contains("Invalid PORT value"));
            },
        );
    }
}
