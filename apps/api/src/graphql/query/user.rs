//! User queries for the cats API GraphQL schema
//!
//! User accounts live in the auth service; these queries proxy to it.

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::error::ApiError;
use crate::graphql::context::{auth_client, user_data};
use crate::graphql::types::{TokenMessage, User};

/// User-related queries
#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Get all users from the auth service
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let users = auth_client(ctx)?
            .get_users()
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// Get a user by id from the auth service
    async fn user_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let user = auth_client(ctx)?
            .get_user(&id)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(user.into())
    }

    /// Echo the caller's identity as established from the bearer token
    ///
    /// Never fails; `user` and `token` are null for anonymous requests.
    async fn check_token(&self, ctx: &Context<'_>) -> TokenMessage {
        TokenMessage::new("Token is valid", user_data(ctx))
    }
}
