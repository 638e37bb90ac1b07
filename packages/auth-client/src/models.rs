//! Auth service request and response models

use serde::{Deserialize, Serialize};

/// Role as reported by the auth service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteRole {
    #[default]
    User,
    Admin,
}

impl RemoteRole {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(role) if role.eq_ignore_ascii_case("admin") => Self::Admin,
            _ => Self::User,
        }
    }
}

/// A user account as returned by the auth service
///
/// The service identifies documents with `_id`; it is normalised to `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteUser {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub role: RemoteRole,
}

/// Login credentials
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Successful login: bearer token plus the account it belongs to
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: RemoteUser,
}

/// Successful registration
#[derive(Debug, Clone)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RemoteUser,
}

// Internal response types for deserialization

#[derive(Debug, Deserialize)]
pub(crate) struct RawUser {
    #[serde(rename = "_id", default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl From<RawUser> for RemoteUser {
    fn from(raw: RawUser) -> Self {
        Self {
            id: raw.object_id.or(raw.id).unwrap_or_default(),
            user_name: raw.user_name,
            email: raw.email,
            role: RemoteRole::parse(raw.role.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    pub user: RawUser,
}

impl From<RawLoginResponse> for LoginResponse {
    fn from(raw: RawLoginResponse) -> Self {
        Self {
            message: raw.message,
            token: raw.token,
            user: raw.user.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRegisterResponse {
    #[serde(default)]
    pub message: String,
    pub data: RawUser,
}

impl From<RawRegisterResponse> for RegisterResponse {
    fn from(raw: RawRegisterResponse) -> Self {
        Self {
            message: raw.message,
            user: raw.data.into(),
        }
    }
}

/// Error body returned by the auth service on non-success statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub message: String,
}
