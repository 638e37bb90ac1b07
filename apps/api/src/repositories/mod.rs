//! Database repository layer for the cats API
//!
//! Resolvers talk to storage through the [`CatStore`] and [`UserStore`]
//! traits. The Postgres repositories are the production implementations;
//! tests substitute in-memory stores.

pub mod cat;
pub mod user;
pub mod utils;

use std::sync::Arc;

use async_trait::async_trait;

use crate::authorization::CatFilter;
use crate::models::cat::{BoundingBox, Cat, CatChanges, NewCat};
use crate::models::user::{User, UserChanges, UserProfile};

pub use cat::CatRepository;
pub use user::UserRepository;

/// Storage for cats
#[async_trait]
pub trait CatStore: Send + Sync {
    /// All cats, oldest first
    async fn find_all(&self) -> Result<Vec<Cat>, sqlx::Error>;

    /// A single cat by id
    async fn find_by_id(&self, id: uuid::Uuid) -> Result<Option<Cat>, sqlx::Error>;

    /// Cats located inside the box (edges inclusive)
    async fn find_in_area(&self, area: BoundingBox) -> Result<Vec<Cat>, sqlx::Error>;

    /// Cats belonging to an owner
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Cat>, sqlx::Error>;

    /// Insert a cat; `None` when the store did not produce a record
    async fn create(&self, cat: NewCat) -> Result<Option<Cat>, sqlx::Error>;

    /// Update the cat selected by `filter`, returning the post-update record
    async fn update(
        &self,
        filter: &CatFilter<'_>,
        changes: &CatChanges,
    ) -> Result<Option<Cat>, sqlx::Error>;

    /// Delete the cat selected by `filter`, returning the deleted record
    async fn delete(&self, filter: &CatFilter<'_>) -> Result<Option<Cat>, sqlx::Error>;
}

/// Storage for the local mirror of user accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert or refresh the mirror row for an auth service account
    async fn upsert(&self, profile: &UserProfile) -> Result<User, sqlx::Error>;

    /// Update a user by id, returning the post-update record
    async fn update(&self, id: &str, changes: &UserChanges) -> Result<Option<User>, sqlx::Error>;

    /// Delete a user by id, returning the deleted record
    async fn delete(&self, id: &str) -> Result<Option<User>, sqlx::Error>;
}

/// Shared cat store handle placed in the GraphQL context
pub type SharedCatStore = Arc<dyn CatStore>;

/// Shared user store handle placed in the GraphQL context
pub type SharedUserStore = Arc<dyn UserStore>;
