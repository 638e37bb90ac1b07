//! User and authentication mutations for the cats API GraphQL schema
//!
//! This module provides:
//! - login / register: proxied to the auth service
//! - updateUser / deleteUser: act on the caller's own account
//! - updateUserAsAdmin / deleteUserAsAdmin: act on any account (admin only)
//!
//! Account mutations work on the local user mirror and return a
//! [`UserResponse`] whose `user` is null when no account matched. The mirror
//! row is written on every successful login and registration.

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use cats_auth_client::RemoteUser;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::graphql::context::{auth_client, require_user, user_store};
use crate::graphql::guards::RoleGuard;
use crate::graphql::types::{Credentials, LoginResponse, UserInput, UserModifyInput, UserResponse};
use crate::models::user::{UserChanges, UserProfile, UserRole};

/// Copy an auth service account into the local mirror
///
/// A mirror failure is logged and does not fail the login or registration.
async fn sync_mirror(ctx: &Context<'_>, user: &RemoteUser) {
    let profile = UserProfile::from(user.clone());
    let store = match user_store(ctx) {
        Ok(store) => store,
        Err(e) => {
            warn!(user_id = %profile.id, error = %e.message, "User mirror unavailable");
            return;
        }
    };

    match store.upsert(&profile).await {
        Ok(_) => debug!(user_id = %profile.id, "User mirror synced"),
        Err(e) => warn!(user_id = %profile.id, error = %e, "Failed to sync user mirror"),
    }
}

/// User mutations
#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Log in with the auth service
    ///
    /// Auth service errors are returned as-is.
    async fn login(&self, ctx: &Context<'_>, credentials: Credentials) -> Result<LoginResponse> {
        let client = auth_client(ctx)?;

        let response = client
            .login(&credentials.into())
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        debug!(user_id = %response.user.id, "Login succeeded");
        sync_mirror(ctx, &response.user).await;
        Ok(response.into())
    }

    /// Register a new account with the auth service
    ///
    /// # Errors
    /// - `BAD_USER_INPUT` for any failure reported by the auth service,
    ///   carrying only its message
    async fn register(&self, ctx: &Context<'_>, user: UserInput) -> Result<UserResponse> {
        let client = auth_client(ctx)?;

        match client.register(&user.into()).await {
            Ok(response) => {
                info!(user_id = %response.user.id, "User registered");
                sync_mirror(ctx, &response.user).await;
                Ok(response.into())
            }
            Err(e) => {
                warn!(error = %e, "Registration rejected");
                Err(ApiError::BadUserInput(e.to_string()).extend())
            }
        }
    }

    /// Update the caller's own account
    ///
    /// # Errors
    /// - `UNAUTHENTICATED` for anonymous callers
    async fn update_user(&self, ctx: &Context<'_>, user: UserModifyInput) -> Result<UserResponse> {
        let caller = require_user(ctx, ApiError::Unauthenticated)?;

        let updated = user_store(ctx)?
            .update(&caller.user.id, &UserChanges::from(user))
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(UserResponse::from_option(
            updated,
            "User updated by user self",
            "User not updated by user self",
        ))
    }

    /// Delete the caller's own account
    ///
    /// # Errors
    /// - `UNAUTHENTICATED` for anonymous callers
    async fn delete_user(&self, ctx: &Context<'_>) -> Result<UserResponse> {
        let caller = require_user(ctx, ApiError::Unauthenticated)?;

        let deleted = user_store(ctx)?
            .delete(&caller.user.id)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        if deleted.is_some() {
            info!(user_id = %caller.user.id, "User deleted own account");
        }
        Ok(UserResponse::from_option(deleted, "User deleted", "User not deleted"))
    }

    /// Update any account
    ///
    /// # Errors
    /// - `UNAUTHORIZED` unless the caller is an admin
    #[graphql(guard = "RoleGuard::new(UserRole::Admin)")]
    async fn update_user_as_admin(
        &self,
        ctx: &Context<'_>,
        user: UserModifyInput,
        id: ID,
    ) -> Result<UserResponse> {
        let updated = user_store(ctx)?
            .update(&id, &UserChanges::from(user))
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(UserResponse::from_option(
            updated,
            "User updated by admin",
            "User not updated by admin",
        ))
    }

    /// Delete any account
    ///
    /// # Errors
    /// - `UNAUTHORIZED` unless the caller is an admin
    #[graphql(guard = "RoleGuard::new(UserRole::Admin)")]
    async fn delete_user_as_admin(&self, ctx: &Context<'_>, id: ID) -> Result<UserResponse> {
        let deleted = user_store(ctx)?
            .delete(&id)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        if deleted.is_some() {
            info!(user_id = %id.as_str(), "User deleted by admin");
        }
        Ok(UserResponse::from_option(
            deleted,
            "User deleted by admin",
            "User not deleted by admin",
        ))
    }
}
