//! Auth service client error types

use thiserror::Error;

/// Auth service client errors
#[derive(Error, Debug)]
pub enum AuthClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("Failed to parse auth service response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The auth service answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Request timeout
    #[error("Request to auth service timed out")]
    Timeout,

    /// Endpoint URL could not be built
    #[error("Invalid auth service URL: {0}")]
    Url(#[from] url::ParseError),

    /// A user id that cannot name a single path segment
    #[error("Invalid user id: {0:?}")]
    InvalidUserId(String),
}

impl AuthClientError {
    /// HTTP status returned by the auth service, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthClientError::Api { status, .. } => Some(*status),
            AuthClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for auth service operations
pub type AuthClientResult<T> = Result<T, AuthClientError>;
