//! `reviewdb` - an in-memory store of games, authors and reviews.
//!
//! The store holds three flat collections and answers every lookup with a
//! linear scan. Reviews point at their game and author through foreign-key
//! fields; nothing enforces that those keys resolve.
//!
//! # Quick Start
//!
//! ```
//! use reviewdb::{GameEdits, NewGame, Store};
//!
//! let store = Store::seeded();
//!
//! let zelda = store.game("1")?.expect("seeded");
//! assert_eq!(zelda.title, "Zelda, Tears of the Kingdom");
//!
//! let added = store.add_game(NewGame::new("Hades", ["PC", "Switch"]))?;
//! assert_eq!(store.games()?.len(), 6);
//!
//! let edits = GameEdits::default().with_title("Hades II");
//! let renamed = store.update_game(&added.id, edits)?.expect("just added");
//! assert_eq!(renamed.platform, vec!["PC", "Switch"]);
//! # Ok::<(), reviewdb::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`config`] - Store configuration
//! - [`error`] - Error types
//! - [`model`] - Entity types and the game edit set
//! - [`seed`] - Fixed seed data loaded at startup
//! - [`store`] - The store itself

#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use model::{Author, Game, GameEdits, NewGame, Review};
pub use store::Store;
