//! HTTP route handlers for the cats API
//!
//! This module contains all endpoint handlers including:
//! - GraphQL endpoint and playground
//! - Health check and status endpoints

pub mod graphql;
pub mod health;

pub use graphql::{graphql_router, GraphQLState};
pub use health::{health_router, HealthState};

use axum::{routing::get, Router};

/// Build the application router without transport layers
pub fn app_router(graphql_state: GraphQLState, health_state: HealthState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/graphql", graphql_router(graphql_state))
        .nest("/health", health_router(health_state))
}

async fn root() -> &'static str {
    "Cats API - GraphQL at /graphql"
}
