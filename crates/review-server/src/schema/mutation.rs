//! GraphQL mutation resolvers.
//!
//! Only games can be written. Authors and reviews are fixed at startup.

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use reviewdb::Store;

use super::types::{AddGameInput, EditGameInput, Game};
use crate::convert;

/// Root mutation type for the GraphQL schema.
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Delete a game by ID and return the games that remain.
    ///
    /// Reviews of the deleted game are not removed.
    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Vec<Option<Game>>>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(convert::nullable_list(store.delete_game(&id)?))
    }

    /// Add a game under a server-generated ID.
    async fn add_game(&self, ctx: &Context<'_>, game: AddGameInput) -> Result<Option<Game>> {
        let store = ctx.data::<Arc<Store>>()?;
        let added = store.add_game(game.into())?;
        Ok(Some(added.into()))
    }

    /// Update the given fields of a game.
    ///
    /// Returns null when no game has the ID.
    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edits: EditGameInput,
    ) -> Result<Option<Game>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.update_game(&id, edits.into())?.map(Game::from))
    }
}
