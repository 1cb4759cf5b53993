//! GraphQL schema definition.
//!
//! This module contains the GraphQL schema, including:
//! - [`types`] - Object and input types (Game, Author, Review, edit inputs)
//! - [`query`] - Query resolvers (list and get-by-id per entity)
//! - [`mutation`] - Mutation resolvers (deleteGame, addGame, updateGame)

mod dangling;
mod mutation;
mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use reviewdb::Store;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::*;

/// The GraphQL schema type for the review server.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Create a new GraphQL schema over the given store.
pub fn create_schema(store: Store) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(Arc::new(store)).finish()
}
