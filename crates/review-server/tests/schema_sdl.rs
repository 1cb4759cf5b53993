//! Tests pinning the exported schema, in particular field nullability.

use review_server::create_schema;
use reviewdb::Store;

/// Trimmed lines of the `{keyword} {name} { ... }` block in `sdl`.
fn block<'a>(sdl: &'a str, keyword: &str, name: &str) -> Vec<&'a str> {
    let header = format!("{keyword} {name} {{");
    sdl.lines()
        .skip_while(|line| line.trim() != header)
        .skip(1)
        .take_while(|line| line.trim() != "}")
        .map(str::trim)
        .collect()
}

fn assert_fields(sdl: &str, keyword: &str, name: &str, fields: &[&str]) {
    let lines = block(sdl, keyword, name);
    assert!(!lines.is_empty(), "{keyword} {name} missing from schema:\n{sdl}");
    for field in fields {
        assert!(lines.contains(field), "{name} lacks `{field}`, has {lines:?}");
    }
}

#[test]
fn test_object_types() {
    let sdl = create_schema(Store::empty()).sdl();

    assert_fields(
        &sdl,
        "type",
        "Game",
        &["id: ID!", "title: String!", "platform: [String!]!", "reviews: [Review!]"],
    );
    assert_fields(
        &sdl,
        "type",
        "Review",
        &["id: ID!", "rating: Int!", "content: String!", "game: Game!", "author: Author!"],
    );
    assert_fields(
        &sdl,
        "type",
        "Author",
        &["id: ID!", "name: String!", "verified: Boolean!", "reviews: [Review!]"],
    );
}

#[test]
fn test_root_types() {
    let sdl = create_schema(Store::empty()).sdl();

    assert_fields(
        &sdl,
        "type",
        "Query",
        &[
            "reviews: [Review]",
            "review(id: ID!): Review",
            "games: [Game]",
            "game(id: ID!): Game",
            "authors: [Author]",
            "author(id: ID!): Author",
        ],
    );
    assert_fields(
        &sdl,
        "type",
        "Mutation",
        &[
            "deleteGame(id: ID!): [Game]",
            "addGame(game: AddGameInput!): Game",
            "updateGame(id: ID!, edits: EditGameInput!): Game",
        ],
    );
}

#[test]
fn test_input_types() {
    let sdl = create_schema(Store::empty()).sdl();

    assert_fields(&sdl, "input", "AddGameInput", &["title: String!", "platform: [String!]!"]);
    assert_fields(&sdl, "input", "EditGameInput", &["title: String", "platform: [String!]"]);
}

#[test]
fn test_foreign_keys_are_hidden() {
    let sdl = create_schema(Store::empty()).sdl();
    let review = block(&sdl, "type", "Review");

    assert!(review.iter().all(|line| !line.starts_with("gameId") && !line.starts_with("authorId")));
}
