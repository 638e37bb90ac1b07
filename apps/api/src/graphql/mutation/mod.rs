//! GraphQL mutations for the cats API
//!
//! This module contains all mutation resolvers, organized by domain.

mod cat;
mod user;

pub use cat::CatMutation;
pub use user::UserMutation;

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(CatMutation, UserMutation);
