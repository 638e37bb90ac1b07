//! GraphQL schema and resolvers for the cats API
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for cats and users
//! - Mutation resolvers for cats, authentication and accounts
//! - Type definitions for all GraphQL objects
//! - Guards for role-based authorization

pub mod context;
pub mod guards;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, CatsSchema, SchemaBuilder};
