//! GraphQL type definitions.
//!
//! Relationship fields (`Game.reviews`, `Author.reviews`, `Review.game`,
//! `Review.author`) are resolved on demand against the store, one scan per
//! field.

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use reviewdb::{Error, Store};

use super::dangling;

/// A game.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Game {
    pub id: ID,
    pub title: String,
    /// Platforms the game ships on.
    pub platform: Vec<String>,
}

#[ComplexObject]
impl Game {
    /// Reviews of this game.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Option<Vec<Review>>> {
        let store = ctx.data::<Arc<Store>>()?;
        dangling::non_null_items(ctx, store, store.reviews_for_game(&self.id)?)
    }
}

/// Someone who writes reviews.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub verified: bool,
}

#[ComplexObject]
impl Author {
    /// Reviews written by this author.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Option<Vec<Review>>> {
        let store = ctx.data::<Arc<Store>>()?;
        dangling::non_null_items(ctx, store, store.reviews_by_author(&self.id)?)
    }
}

/// A review of one game by one author.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Review {
    pub id: ID,
    /// Score out of ten.
    pub rating: i32,
    pub content: String,
    #[graphql(skip)]
    pub author_id: String,
    #[graphql(skip)]
    pub game_id: String,
}

#[ComplexObject]
impl Review {
    /// The reviewed game.
    ///
    /// Errors when the game has been deleted since the review was written.
    /// Review resolvers null such reviews before this field is reached.
    async fn game(&self, ctx: &Context<'_>) -> Result<Game> {
        let store = ctx.data::<Arc<Store>>()?;
        let game = store.game(&self.game_id)?.ok_or_else(|| Error::missing_game(&self.game_id))?;
        Ok(game.into())
    }

    /// The review's author.
    async fn author(&self, ctx: &Context<'_>) -> Result<Author> {
        let store = ctx.data::<Arc<Store>>()?;
        let author =
            store.author(&self.author_id)?.ok_or_else(|| Error::missing_author(&self.author_id))?;
        Ok(author.into())
    }
}

/// Input for adding a game. The id is assigned by the server.
#[derive(InputObject, Debug)]
pub struct AddGameInput {
    pub title: String,
    pub platform: Vec<String>,
}

/// Input for editing a game. Omitted (or null) fields are left unchanged.
#[derive(InputObject, Debug, Default)]
pub struct EditGameInput {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}
