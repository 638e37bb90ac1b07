//! User and authentication GraphQL types
//!
//! This module defines the GraphQL types for user profiles and the payloads
//! returned by login, registration and account mutations.

use async_graphql::{Enum, InputObject, SimpleObject, ID};

use cats_auth_client::{self as auth, RemoteUser};

use crate::models::user::{
    AuthenticatedUser, User as DbUser, UserChanges, UserData, UserProfile,
    UserRole as DbUserRole,
};

/// User role enum for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(rename_items = "lowercase")]
pub enum UserRole {
    /// Regular user
    User,
    /// Administrator allowed to change any resource
    Admin,
}

impl From<DbUserRole> for UserRole {
    fn from(role: DbUserRole) -> Self {
        match role {
            DbUserRole::User => Self::User,
            DbUserRole::Admin => Self::Admin,
        }
    }
}

/// User account information exposed via GraphQL
#[derive(Debug, Clone, SimpleObject)]
pub struct User {
    pub id: ID,
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<UserProfile> for User {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: ID(profile.id),
            user_name: profile.user_name,
            email: profile.email,
            role: profile.role.into(),
        }
    }
}

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        UserProfile::from(user).into()
    }
}

impl From<RemoteUser> for User {
    fn from(user: RemoteUser) -> Self {
        UserProfile::from(user).into()
    }
}

impl From<&AuthenticatedUser> for User {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: ID(user.id.clone()),
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            role: user.role.into(),
        }
    }
}

/// Login credentials, forwarded to the auth service as-is
#[derive(Debug, InputObject)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl From<Credentials> for auth::Credentials {
    fn from(input: Credentials) -> Self {
        auth::Credentials::new(input.username, input.password)
    }
}

/// A new account to register with the auth service
#[derive(Debug, InputObject)]
pub struct UserInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl From<UserInput> for auth::NewUser {
    fn from(input: UserInput) -> Self {
        auth::NewUser {
            user_name: input.user_name,
            email: input.email,
            password: input.password,
        }
    }
}

/// Profile changes; omitted fields are left unchanged
#[derive(Debug, Default, InputObject)]
pub struct UserModifyInput {
    pub user_name: Option<String>,
    pub email: Option<String>,
}

impl From<UserModifyInput> for UserChanges {
    fn from(input: UserModifyInput) -> Self {
        Self {
            user_name: input.user_name,
            email: input.email,
        }
    }
}

/// Payload returned after a successful login
#[derive(Debug, Clone, SimpleObject)]
pub struct LoginResponse {
    pub message: String,
    /// Bearer token issued by the auth service
    pub token: String,
    pub user: User,
}

impl From<auth::LoginResponse> for LoginResponse {
    fn from(response: auth::LoginResponse) -> Self {
        Self {
            message: response.message,
            token: response.token,
            user: response.user.into(),
        }
    }
}

/// Result of a user mutation; `user` is null when nothing was changed
#[derive(Debug, Clone, SimpleObject)]
pub struct UserResponse {
    pub message: String,
    pub user: Option<User>,
}

impl UserResponse {
    pub fn new(message: impl Into<String>, user: impl Into<User>) -> Self {
        Self {
            message: message.into(),
            user: Some(user.into()),
        }
    }

    /// Response for an operation that matched nothing
    pub fn miss(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user: None,
        }
    }

    /// Pick the success or miss message depending on whether a user came back
    pub fn from_option(user: Option<DbUser>, hit: &str, miss: &str) -> Self {
        match user {
            Some(user) => Self::new(hit, user),
            None => Self::miss(miss),
        }
    }
}

impl From<auth::RegisterResponse> for UserResponse {
    fn from(response: auth::RegisterResponse) -> Self {
        Self::new(response.message, response.user)
    }
}

/// The caller's identity as seen by the server
#[derive(Debug, Clone, SimpleObject)]
pub struct TokenMessage {
    pub message: String,
    pub token: Option<String>,
    pub user: Option<User>,
}

impl TokenMessage {
    pub fn new(message: impl Into<String>, user_data: Option<&UserData>) -> Self {
        Self {
            message: message.into(),
            token: user_data.map(|data| data.token.clone()),
            user: user_data.map(|data| User::from(&data.user)),
        }
    }
}
