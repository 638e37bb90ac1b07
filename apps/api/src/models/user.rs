//! User and authentication models
//!
//! This module contains:
//! - The local mirror of user accounts (`users` table)
//! - The token claims issued by the auth service
//! - The per-request authenticated identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cats_auth_client::{RemoteRole, RemoteUser};

/// User role enum matching PostgreSQL user_role type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl From<RemoteRole> for UserRole {
    fn from(role: RemoteRole) -> Self {
        match role {
            RemoteRole::User => Self::User,
            RemoteRole::Admin => Self::Admin,
        }
    }
}

/// User account from the local `users` mirror table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    /// User id as issued by the auth service
    pub id: String,

    pub user_name: String,

    pub email: String,

    pub role: UserRole,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Partial profile update; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub user_name: Option<String>,
    pub email: Option<String>,
}

/// A user profile regardless of where it was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<RemoteUser> for UserProfile {
    fn from(user: RemoteUser) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            role: user.role.into(),
        }
    }
}

/// Token claims as signed by the auth service
///
/// The payload is the user document itself; its `_id` is normalised to `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(rename = "_id", default)]
    object_id: Option<String>,

    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    pub user_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub role: UserRole,

    /// Issued at timestamp (Unix epoch)
    #[serde(default)]
    pub iat: Option<i64>,

    /// Expiration timestamp (Unix epoch), validated when present
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// The user id carried by the token, if any
    pub fn user_id(&self) -> Option<&str> {
        self.object_id
            .as_deref()
            .or(self.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// The authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    /// Check whether the caller holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Per-request ambient context attached by the auth middleware
///
/// Present only for authenticated requests; resolvers read it from the
/// GraphQL context and never persist it.
#[derive(Debug, Clone)]
pub struct UserData {
    pub user: AuthenticatedUser,
    pub token: String,
}

impl UserData {
    /// Build the context from verified claims and the raw token
    ///
    /// Returns `None` when the claims do not name a user.
    pub fn from_claims(claims: Claims, token: impl Into<String>) -> Option<Self> {
        let id = claims.user_id()?.to_string();
        Some(Self {
            user: AuthenticatedUser {
                id,
                user_name: claims.user_name,
                email: claims.email,
                role: claims.role,
            },
            token: token.into(),
        })
    }
}
