//! Cat mutations for the cats API GraphQL schema
//!
//! Creating a cat requires an authenticated caller, who becomes its owner.
//! Updating and deleting go through a [`CatFilter`] scoped to the caller, so
//! an owner and an admin share one code path. A filter that matches nothing
//! yields a message rather than an error.

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use tracing::{debug, info};
use uuid::Uuid;

use crate::authorization::CatFilter;
use crate::error::ApiError;
use crate::graphql::context::{cat_store, require_user};
use crate::graphql::types::{CatInput, CatModifyInput, CatResult};
use crate::models::cat::CatChanges;
use crate::models::user::AuthenticatedUser;

const CAT_NOT_ADDED: &str = "cat not added";

/// Cat mutations
#[derive(Default)]
pub struct CatMutation;

#[Object]
impl CatMutation {
    /// Create a cat owned by the caller
    ///
    /// Any owner supplied in the input is replaced by the caller's id.
    ///
    /// # Errors
    /// - `UNAUTHENTICATED` for anonymous callers
    async fn create_cat(&self, ctx: &Context<'_>, input: CatInput) -> Result<CatResult> {
        let caller = require_user(ctx, ApiError::Unauthenticated)?;

        let new_cat = input.into_new_cat(caller.user.id.as_str());
        let cat = cat_store(ctx)?
            .create(new_cat)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        if let Some(cat) = &cat {
            info!(cat_id = %cat.id, owner = %cat.owner, "Cat created");
        }
        Ok(CatResult::from_option(cat, CAT_NOT_ADDED))
    }

    /// Update a cat owned by the caller, or any cat for admins
    ///
    /// Returns the updated cat, or a message when no cat matched.
    ///
    /// # Errors
    /// - `UNAUTHORIZED` for anonymous callers
    async fn update_cat(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: CatModifyInput,
    ) -> Result<CatResult> {
        let caller = require_user(ctx, ApiError::Unauthorized)?;
        let changes = CatChanges::from(input);

        let Ok(cat_id) = Uuid::parse_str(&id) else {
            debug!(id = %id.as_str(), "Malformed cat id");
            return Ok(CatResult::from_option(
                None,
                miss_message(&caller.user, "updated"),
            ));
        };

        let filter = CatFilter::scoped(cat_id, &caller.user);
        let cat = cat_store(ctx)?
            .update(&filter, &changes)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        if cat.is_none() {
            debug!(cat_id = %cat_id, user_id = %caller.user.id, "No cat matched update");
        }
        Ok(CatResult::from_option(cat, filter.miss_message("updated")))
    }

    /// Delete a cat owned by the caller, or any cat for admins
    ///
    /// Returns the deleted cat, or a message when no cat matched.
    ///
    /// # Errors
    /// - `UNAUTHORIZED` for anonymous callers
    async fn delete_cat(&self, ctx: &Context<'_>, id: ID) -> Result<CatResult> {
        let caller = require_user(ctx, ApiError::Unauthorized)?;

        let Ok(cat_id) = Uuid::parse_str(&id) else {
            debug!(id = %id.as_str(), "Malformed cat id");
            return Ok(CatResult::from_option(
                None,
                miss_message(&caller.user, "deleted"),
            ));
        };

        let filter = CatFilter::scoped(cat_id, &caller.user);
        let cat = cat_store(ctx)?
            .delete(&filter)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        match &cat {
            Some(cat) => info!(cat_id = %cat.id, user_id = %caller.user.id, "Cat deleted"),
            None => debug!(cat_id = %cat_id, user_id = %caller.user.id, "No cat matched delete"),
        }
        Ok(CatResult::from_option(cat, filter.miss_message("deleted")))
    }
}

/// Miss message for an id that cannot name any cat
fn miss_message(caller: &AuthenticatedUser, verb: &str) -> String {
    CatFilter::scoped(Uuid::nil(), caller).miss_message(verb)
}
