//! Conversions between store records and GraphQL types.
//!
//! Output conversions drop nothing but rename ids into [`ID`]s; review foreign
//! keys are carried along (hidden from the schema) so the relationship
//! resolvers can follow them.

use async_graphql::ID;
use reviewdb::{Author as DbAuthor, Game as DbGame, GameEdits, NewGame, Review as DbReview};

use crate::schema::{AddGameInput, Author, EditGameInput, Game, Review};

impl From<DbGame> for Game {
    fn from(game: DbGame) -> Self {
        Self { id: ID(game.id), title: game.title, platform: game.platform }
    }
}

impl From<DbAuthor> for Author {
    fn from(author: DbAuthor) -> Self {
        Self { id: ID(author.id), name: author.name, verified: author.verified }
    }
}

impl From<DbReview> for Review {
    fn from(review: DbReview) -> Self {
        Self {
            id: ID(review.id),
            rating: i32::from(review.rating),
            content: review.content,
            author_id: review.author_id,
            game_id: review.game_id,
        }
    }
}

impl From<AddGameInput> for NewGame {
    fn from(input: AddGameInput) -> Self {
        NewGame::new(input.title, input.platform)
    }
}

impl From<EditGameInput> for GameEdits {
    fn from(input: EditGameInput) -> Self {
        GameEdits { title: input.title, platform: input.platform }
    }
}

/// Convert store records into a GraphQL list whose list and items are both
/// nullable, e.g. `[Game]`.
pub fn nullable_list<T, U>(items: Vec<T>) -> Option<Vec<Option<U>>>
where
    U: From<T>,
{
    Some(items.into_iter().map(|item| Some(U::from(item))).collect())
}
