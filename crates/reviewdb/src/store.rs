//! The in-memory store.
//!
//! [`Store`] owns the game, author and review collections behind a single
//! [`RwLock`]. Lookups scan a collection front to back; relationship lookups
//! scan the review collection once per call. No index is maintained.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::Rng;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::model::{Author, Game, GameEdits, NewGame, Review};
use crate::seed;

#[derive(Debug, Default)]
struct Tables {
    games: Vec<Game>,
    authors: Vec<Author>,
    reviews: Vec<Review>,
}

/// In-memory store of games, authors and reviews.
///
/// Each operation takes the table lock exactly once, so a mutation is
/// observed by readers either entirely or not at all.
#[derive(Debug)]
pub struct Store {
    tables: RwLock<Tables>,
    config: StoreConfig,
}

impl Store {
    /// Create a store from a configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let tables = if config.seed {
            Tables { games: seed::games(), authors: seed::authors(), reviews: seed::reviews() }
        } else {
            Tables::default()
        };
        Self { tables: RwLock::new(tables), config }
    }

    /// Create a store holding the seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(StoreConfig::default())
    }

    /// Create a store with no records.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(StoreConfig::default().seed(false))
    }

    /// The configuration this store was created with.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|e| Error::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|e| Error::LockPoisoned(e.to_string()))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All games, in insertion order.
    pub fn games(&self) -> Result<Vec<Game>> {
        Ok(self.read()?.games.clone())
    }

    /// The first game with the given id.
    pub fn game(&self, id: &str) -> Result<Option<Game>> {
        let found = self.read()?.games.iter().find(|g| g.id == id).cloned();
        debug!(id, found = found.is_some(), "game lookup");
        Ok(found)
    }

    /// All authors.
    pub fn authors(&self) -> Result<Vec<Author>> {
        Ok(self.read()?.authors.clone())
    }

    /// The first author with the given id.
    pub fn author(&self, id: &str) -> Result<Option<Author>> {
        let found = self.read()?.authors.iter().find(|a| a.id == id).cloned();
        debug!(id, found = found.is_some(), "author lookup");
        Ok(found)
    }

    /// All reviews.
    pub fn reviews(&self) -> Result<Vec<Review>> {
        Ok(self.read()?.reviews.clone())
    }

    /// The first review with the given id.
    pub fn review(&self, id: &str) -> Result<Option<Review>> {
        let found = self.read()?.reviews.iter().find(|r| r.id == id).cloned();
        debug!(id, found = found.is_some(), "review lookup");
        Ok(found)
    }

    /// Reviews whose `game_id` is `game_id`.
    pub fn reviews_for_game(&self, game_id: &str) -> Result<Vec<Review>> {
        Ok(self.read()?.reviews.iter().filter(|r| r.game_id == game_id).cloned().collect())
    }

    /// Reviews whose `author_id` is `author_id`.
    pub fn reviews_by_author(&self, author_id: &str) -> Result<Vec<Review>> {
        Ok(self.read()?.reviews.iter().filter(|r| r.author_id == author_id).cloned().collect())
    }

    // =========================================================================
    // Game mutations
    // =========================================================================

    /// Remove every game with the given id and return the games that remain.
    ///
    /// Reviews of the removed game are kept; their `game_id` no longer
    /// resolves afterwards.
    pub fn delete_game(&self, id: &str) -> Result<Vec<Game>> {
        let mut tables = self.write()?;
        let before = tables.games.len();
        tables.games.retain(|g| g.id != id);
        let removed = before - tables.games.len();
        info!(id, removed, "deleted game");
        Ok(tables.games.clone())
    }

    /// Append a new game under a freshly drawn id and return it.
    ///
    /// The id is a random number below the configured upper bound. It is not
    /// checked against existing ids.
    pub fn add_game(&self, new_game: NewGame) -> Result<Game> {
        let id = self.next_game_id();
        let game = new_game.into_game(id);

        let mut tables = self.write()?;
        tables.games.push(game.clone());
        info!(id = %game.id, title = %game.title, "added game");
        Ok(game)
    }

    /// Apply `edits` to every game with the given id.
    ///
    /// Returns the first matching game after the update, or `None` when no
    /// game has that id (in which case nothing changes).
    pub fn update_game(&self, id: &str, edits: GameEdits) -> Result<Option<Game>> {
        let mut tables = self.write()?;
        let mut updated = None;
        for game in tables.games.iter_mut().filter(|g| g.id == id) {
            edits.apply(game);
            if updated.is_none() {
                updated = Some(game.clone());
            }
        }
        info!(id, found = updated.is_some(), "updated game");
        Ok(updated)
    }

    fn next_game_id(&self) -> String {
        let bound = self.config.id_upper_bound.max(1);
        rand::thread_rng().gen_range(0..bound).to_string()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_stay_below_bound() {
        let store = Store::new(StoreConfig::default().seed(false).id_upper_bound(3));
        for _ in 0..50 {
            let id: u32 = store.next_game_id().parse().unwrap();
            assert!(id < 3);
        }
    }

    #[test]
    fn bound_of_one_always_yields_zero() {
        let store = Store::new(StoreConfig::default().seed(false).id_upper_bound(1));
        assert_eq!(store.next_game_id(), "0");
    }

    #[test]
    fn config_is_kept() {
        let config = StoreConfig::default().id_upper_bound(50);
        let store = Store::new(config.clone());
        assert_eq!(store.config(), &config);
        assert_eq!(store.games().unwrap().len(), 5);
    }

    #[test]
    fn empty_store_has_no_records() {
        let store = Store::empty();
        assert!(store.games().unwrap().is_empty());
        assert!(store.authors().unwrap().is_empty());
        assert!(store.reviews().unwrap().is_empty());
    }
}
