//! GraphQL query resolvers.
//!
//! Get-by-id resolvers return null for unknown ids rather than an error.
//! Review results go through the dangling-reference check so that reviews of deleted games
//! come back as null.

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use reviewdb::Store;

use super::dangling;
use super::types::{Author, Game, Review};
use crate::convert;

/// Root query type for the GraphQL schema.
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// All reviews.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Review>>>> {
        let store = ctx.data::<Arc<Store>>()?;
        dangling::nullable_items(ctx, store, store.reviews()?)
    }

    /// A single review by ID.
    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        let store = ctx.data::<Arc<Store>>()?;
        dangling::nullable_item(ctx, store, store.review(&id)?)
    }

    /// All games.
    async fn games(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Game>>>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(convert::nullable_list(store.games()?))
    }

    /// A single game by ID.
    async fn game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Game>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.game(&id)?.map(Game::from))
    }

    /// All authors.
    async fn authors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Author>>>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(convert::nullable_list(store.authors()?))
    }

    /// A single author by ID.
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.author(&id)?.map(Author::from))
    }
}
