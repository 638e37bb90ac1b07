//! Test helper functions for API integration tests
//!
//! Provides a schema wired to in-memory stores and helpers for inspecting
//! GraphQL responses.

#![allow(dead_code)]

use std::sync::Arc;

use async_graphql::{Request, Response, Variables};
use serde_json::Value;

use cats_api::graphql::{CatsSchema, SchemaBuilder};
use cats_api::models::user::UserData;
use cats_auth_client::AuthClient;
use cats_shared_config::AuthServiceConfig;

use super::stores::{InMemoryCatStore, InMemoryUserStore};

/// An address nothing listens on; used when a test must not reach the auth service
pub const UNUSED_AUTH_URL: &str = "http://127.0.0.1:9";

/// A schema plus handles on its stores
pub struct TestApp {
    pub schema: CatsSchema,
    pub cats: Arc<InMemoryCatStore>,
    pub users: Arc<InMemoryUserStore>,
}

impl TestApp {
    /// Schema with the auth service configured at `UNUSED_AUTH_URL`
    pub fn new(cats: InMemoryCatStore, users: InMemoryUserStore) -> Self {
        Self::build(cats, users, Some(UNUSED_AUTH_URL))
    }

    /// Schema with the auth service at `auth_url`, or without one
    pub fn build(
        cats: InMemoryCatStore,
        users: InMemoryUserStore,
        auth_url: Option<&str>,
    ) -> Self {
        let cats = Arc::new(cats);
        let users = Arc::new(users);

        let mut builder = SchemaBuilder::new(cats.clone(), users.clone());
        if let Some(url) = auth_url {
            let client = AuthClient::new(&AuthServiceConfig::with_url(url)).unwrap();
            builder = builder.auth_client(client);
        }

        Self {
            schema: builder.build(),
            cats,
            users,
        }
    }

    /// Execute a document, optionally as an authenticated caller
    pub async fn execute(&self, query: &str, caller: Option<UserData>) -> Response {
        self.execute_with(query, Value::Null, caller).await
    }

    /// Execute a document with JSON variables
    pub async fn execute_with(
        &self,
        query: &str,
        variables: Value,
        caller: Option<UserData>,
    ) -> Response {
        let mut request = Request::new(query).variables(Variables::from_json(variables));
        if let Some(caller) = caller {
            request = request.data(caller);
        }
        self.schema.execute(request).await
    }
}

/// The response data as JSON, failing the test on errors
pub fn data(response: &Response) -> Value {
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.clone().into_json().unwrap()
}

/// The first error as JSON (`message`, `extensions`, ...)
pub fn first_error(response: &Response) -> Value {
    let error = response
        .errors
        .first()
        .unwrap_or_else(|| panic!("expected an error, got data {:?}", response.data));
    serde_json::to_value(error).unwrap()
}

/// The `extensions.code` of the first error
pub fn error_code(response: &Response) -> String {
    first_error(response)["extensions"]["code"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

/// The message of the first error
pub fn error_message(response: &Response) -> String {
    first_error(response)["message"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
