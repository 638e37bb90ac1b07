//! Cat queries for the cats API GraphQL schema
//!
//! This module provides read access to cats:
//! - cats: Every cat
//! - catById: A single cat, failing with code "404" when missing
//! - catsByArea: Cats inside a bounding box
//! - catsByOwner: Cats belonging to a user
//!
//! Every query first checks that the auth service is configured.

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::graphql::context::{cat_store, ensure_auth_configured};
use crate::graphql::types::{Cat, CatsResult, LocationInput};
use crate::models::cat::BoundingBox;

const NO_CAT_IN_AREA: &str = "No cat found in this area";
const NO_CAT_FOR_OWNER: &str = "No cat belongs to this owner";

/// Cat-related queries
#[derive(Default)]
pub struct CatQuery;

#[Object]
impl CatQuery {
    /// Get all cats
    async fn cats(&self, ctx: &Context<'_>) -> Result<Vec<Cat>> {
        ensure_auth_configured(ctx)?;

        let cats = cat_store(ctx)?
            .find_all()
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(cats.into_iter().map(Cat::from).collect())
    }

    /// Get a cat by id
    ///
    /// # Errors
    /// - `404` if no cat has this id (including ids that are not UUIDs)
    async fn cat_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Cat> {
        ensure_auth_configured(ctx)?;

        let Ok(id) = Uuid::parse_str(&id) else {
            debug!(id = %id.as_str(), "Malformed cat id");
            return Err(ApiError::not_found("Cat").extend());
        };

        cat_store(ctx)?
            .find_by_id(id)
            .await
            .map_err(|e| ApiError::from(e).extend())?
            .map(Cat::from)
            .ok_or_else(|| ApiError::not_found("Cat").extend())
    }

    /// Get the cats inside the box spanned by two corners (edges inclusive)
    ///
    /// Returns a message instead of an empty list when nothing matches.
    async fn cats_by_area(
        &self,
        ctx: &Context<'_>,
        top_right: LocationInput,
        bottom_left: LocationInput,
    ) -> Result<CatsResult> {
        ensure_auth_configured(ctx)?;

        let area = BoundingBox::from_corners(top_right.into(), bottom_left.into());
        let cats = cat_store(ctx)?
            .find_in_area(area)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        if cats.is_empty() {
            debug!(?area, "No cats in area");
        }
        Ok(CatsResult::from_cats(cats, NO_CAT_IN_AREA))
    }

    /// Get the cats belonging to a user
    ///
    /// Returns a message instead of an empty list when nothing matches.
    async fn cats_by_owner(&self, ctx: &Context<'_>, owner_id: ID) -> Result<CatsResult> {
        ensure_auth_configured(ctx)?;

        let cats = cat_store(ctx)?
            .find_by_owner(&owner_id)
            .await
            .map_err(|e| ApiError::from(e).extend())?;

        Ok(CatsResult::from_cats(cats, NO_CAT_FOR_OWNER))
    }
}
