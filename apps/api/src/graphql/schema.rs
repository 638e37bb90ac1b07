//! GraphQL schema builder for the cats API
//!
//! This module provides the schema construction for the async-graphql API.

use async_graphql::{EmptySubscription, Schema};
use cats_auth_client::AuthClient;

use crate::repositories::{SharedCatStore, SharedUserStore};

use super::mutation::Mutation;
use super::query::Query;

/// The cats API GraphQL schema type
pub type CatsSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with its stores and clients
pub struct SchemaBuilder {
    cat_store: SharedCatStore,
    user_store: SharedUserStore,
    auth_client: Option<AuthClient>,
}

impl SchemaBuilder {
    /// Create a new schema builder around the stores every resolver needs
    pub fn new(cat_store: SharedCatStore, user_store: SharedUserStore) -> Self {
        Self {
            cat_store,
            user_store,
            auth_client: None,
        }
    }

    /// Set the auth service client
    ///
    /// If not set, resolvers that depend on the auth service fail with a
    /// configuration error.
    pub fn auth_client(mut self, auth_client: AuthClient) -> Self {
        self.auth_client = Some(auth_client);
        self
    }

    /// Build the schema with all configured services
    pub fn build(self) -> CatsSchema {
        let mut builder = Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .data(self.cat_store)
            .data(self.user_store);

        if let Some(auth_client) = self.auth_client {
            builder = builder.data(auth_client);
        }

        builder.finish()
    }
}

/// Create a new GraphQL schema with the provided stores and optional auth client
pub fn build_schema(
    cat_store: SharedCatStore,
    user_store: SharedUserStore,
    auth_client: Option<AuthClient>,
) -> CatsSchema {
    let builder = SchemaBuilder::new(cat_store, user_store);
    match auth_client {
        Some(client) => builder.auth_client(client).build(),
        None => builder.build(),
    }
}
