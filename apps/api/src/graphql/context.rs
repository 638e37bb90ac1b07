//! Accessors for per-request and schema-wide data in the GraphQL context

use async_graphql::{Context, ErrorExtensions, Result};
use cats_auth_client::AuthClient;

use crate::error::ApiError;
use crate::models::user::UserData;
use crate::repositories::{SharedCatStore, SharedUserStore};

/// The authenticated caller, or `None` for anonymous requests
pub fn user_data<'a>(ctx: &Context<'a>) -> Option<&'a UserData> {
    ctx.data_opt::<UserData>()
}

/// The authenticated caller, failing with `missing` for anonymous requests
pub fn require_user<'a>(ctx: &Context<'a>, missing: ApiError) -> Result<&'a UserData> {
    user_data(ctx).ok_or_else(|| missing.extend())
}

/// The auth service client, failing when `AUTH_URL` is not configured
pub fn auth_client<'a>(ctx: &Context<'a>) -> Result<&'a AuthClient> {
    ctx.data_opt::<AuthClient>()
        .ok_or_else(|| ApiError::auth_url_missing().extend())
}

/// Fail when `AUTH_URL` is not configured
///
/// Cat queries never call the auth service but keep this check.
pub fn ensure_auth_configured(ctx: &Context<'_>) -> Result<()> {
    auth_client(ctx).map(|_| ())
}

pub fn cat_store<'a>(ctx: &Context<'a>) -> Result<&'a SharedCatStore> {
    ctx.data::<SharedCatStore>()
}

pub fn user_store<'a>(ctx: &Context<'a>) -> Result<&'a SharedUserStore> {
    ctx.data::<SharedUserStore>()
}
