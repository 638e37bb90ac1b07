//! GraphQL queries for the cats API
//!
//! This module contains all query resolvers, organized by domain.

mod cat;
mod user;

pub use cat::CatQuery;
pub use user::UserQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(CatQuery, UserQuery);
