//! GraphQL HTTP endpoints
//!
//! - `POST /graphql` - Execute a query or mutation
//! - `GET /graphql/playground` - Interactive playground (development aid)

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use crate::graphql::CatsSchema;
use crate::middleware::TokenVerifier;

/// Shared state for the GraphQL handlers
#[derive(Clone)]
pub struct GraphQLState {
    pub schema: CatsSchema,
    /// `None` when no `JWT_SECRET` is configured; every request is anonymous
    pub verifier: Option<TokenVerifier>,
}

impl GraphQLState {
    pub fn new(schema: CatsSchema, verifier: Option<TokenVerifier>) -> Self {
        Self { schema, verifier }
    }
}

/// Create the GraphQL router
pub fn graphql_router(state: GraphQLState) -> Router {
    Router::new()
        .route("/", post(graphql_handler))
        .route("/playground", get(graphql_playground))
        .with_state(state)
}

/// GraphQL handler that executes queries against the schema
///
/// The bearer token, when present and valid, becomes the request's
/// `UserData`; resolvers read the caller's identity from there.
async fn graphql_handler(
    State(state): State<GraphQLState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    if let Some(user_data) = state
        .verifier
        .as_ref()
        .and_then(|verifier| verifier.authenticate(&headers))
    {
        request = request.data(user_data);
    }

    state.schema.execute(request).await.into()
}

/// GraphQL Playground handler for development
async fn graphql_playground() -> impl IntoResponse {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
