//! Error types for `reviewdb`.

use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the store.
#[derive(Debug, Error)]
pub enum Error {
    /// The table lock was poisoned (a thread panicked while holding it).
    #[error("internal lock poisoned: {0}")]
    LockPoisoned(String),

    /// A foreign key points at a record that does not exist.
    ///
    /// Deleting a game leaves its reviews in place, so this is an expected
    /// state rather than corruption.
    #[error("dangling reference: no {entity} with id {id}")]
    DanglingReference {
        /// Kind of record the key was expected to resolve to.
        entity: &'static str,
        /// The unresolved id.
        id: String,
    },
}

impl Error {
    /// Build a [`Error::DanglingReference`] for a missing game.
    #[must_use]
    pub fn missing_game(id: impl Into<String>) -> Self {
        Self::DanglingReference { entity: "game", id: id.into() }
    }

    /// Build a [`Error::DanglingReference`] for a missing author.
    #[must_use]
    pub fn missing_author(id: impl Into<String>) -> Self {
        Self::DanglingReference { entity: "author", id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_reference_message_names_entity_and_id() {
        assert_eq!(Error::missing_game("1").to_string(), "dangling reference: no game with id 1");
        assert_eq!(
            Error::missing_author("42").to_string(),
            "dangling reference: no author with id 42"
        );
    }
}
