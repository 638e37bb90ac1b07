//! Error handling for the cats API
//!
//! Resolver failures are represented by [`ApiError`] and surfaced to clients
//! as GraphQL errors whose `extensions.code` identifies the failure class.
//! Operations that simply found nothing to act on are not errors; they
//! return a message payload instead (see `graphql::types::MessageResponse`).

use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use cats_auth_client::AuthClientError;
use thiserror::Error;

/// Message used when the auth service address is missing
pub const AUTH_URL_MISSING: &str = "Auth URL not set in .env file";

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Configuration ==========
    /// A required external address is not configured
    #[error("{0}")]
    Configuration(String),

    // ========== Authentication & Authorization ==========
    /// No authenticated identity on the request
    #[error("User not authenticated")]
    Unauthenticated,

    /// Identity missing or lacking the required role
    #[error("User not authorized")]
    Unauthorized,

    // ========== Resource Errors ==========
    /// Single-record lookup found nothing
    #[error("{resource_type} not found")]
    NotFound { resource_type: &'static str },

    // ========== Validation Errors ==========
    /// Downstream service rejected the client's input
    #[error("{0}")]
    BadUserInput(String),

    // ========== External Service Errors ==========
    /// Auth service call failed
    #[error("{0}")]
    AuthService(#[from] AuthClientError),

    // ========== Database Errors ==========
    /// Database query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Configuration error for the missing auth service address
    pub fn auth_url_missing() -> Self {
        Self::Configuration(AUTH_URL_MISSING.to_string())
    }

    /// Create a not found error for a specific resource
    pub fn not_found(resource_type: &'static str) -> Self {
        Self::NotFound { resource_type }
    }

    /// Get the HTTP status this error corresponds to
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadUserInput(_) => StatusCode::BAD_REQUEST,
            Self::AuthService(_) => StatusCode::BAD_GATEWAY,
            Self::Configuration(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the `extensions.code` value for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound { .. } => "404",
            Self::BadUserInput(_) => "BAD_USER_INPUT",
            Self::AuthService(_) => "AUTH_SERVICE_ERROR",
            Self::Database(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Message shown to clients
    ///
    /// Database failures are reported generically; the detail is logged.
    fn client_message(&self) -> String {
        match self {
            Self::Database(_) => "An unexpected error occurred".to_string(),
            _ => self.to_string(),
        }
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(
                error = %self,
                code = self.error_code(),
                "Authorization error"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        self.log();

        let code = self.error_code();
        let http_status = match self {
            Self::BadUserInput(_) => Some(self.status_code().as_u16()),
            _ => None,
        };

        async_graphql::Error::new(self.client_message()).extend_with(|_, e| {
            e.set("code", code);
            if let Some(status) = http_status {
                if let Ok(http) = async_graphql::Value::from_json(serde_json::json!({
                    "status": status
                })) {
                    e.set("http", http);
                }
            }
        })
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
