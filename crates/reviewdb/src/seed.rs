//! Fixed seed data.
//!
//! Every store created with [`StoreConfig::seed`](crate::StoreConfig) set
//! starts from these records, in this order.

use crate::model::{Author, Game, Review};

const PLACEHOLDER_CONTENT: &str = "lorem ipsum";

/// The seeded games.
#[must_use]
pub fn games() -> Vec<Game> {
    vec![
        Game::new("1", "Zelda, Tears of the Kingdom", ["Switch"]),
        Game::new("2", "Final Fantasy 7 Remake", ["PS5", "Xbox"]),
        Game::new("3", "Elden Ring", ["PS5", "Xbox", "PC"]),
        Game::new("4", "Mario Kart", ["Switch"]),
        Game::new("5", "Pokemon Scarlet", ["PS5", "Xbox", "PC"]),
    ]
}

/// The seeded authors.
#[must_use]
pub fn authors() -> Vec<Author> {
    vec![
        Author::new("1", "mario", true),
        Author::new("2", "yoshi", false),
        Author::new("3", "peach", true),
    ]
}

/// The seeded reviews.
#[must_use]
pub fn reviews() -> Vec<Review> {
    // (id, rating, author_id, game_id)
    [
        ("1", 9, "1", "2"),
        ("2", 10, "2", "1"),
        ("3", 7, "3", "3"),
        ("4", 5, "2", "4"),
        ("5", 8, "2", "5"),
        ("6", 7, "1", "2"),
        ("7", 10, "3", "1"),
    ]
    .into_iter()
    .map(|(id, rating, author_id, game_id)| {
        Review::new(id, rating, PLACEHOLDER_CONTENT, author_id, game_id)
    })
    .collect()
}
