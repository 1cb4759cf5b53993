//! GraphQL server for the game reviews store.
//!
//! This crate exposes a [`reviewdb::Store`] as a GraphQL API over HTTP.
//!
//! # Modules
//!
//! - [`schema`] - GraphQL schema definition (types, queries, mutations)
//! - [`convert`] - Conversions between store records and GraphQL types
//! - [`config`] - Server configuration
//! - [`server`] - HTTP routing and the listener loop

#![deny(clippy::unwrap_used)]

pub mod config;
pub mod convert;
pub mod schema;
pub mod server;

pub use config::ServerConfig;
pub use schema::{create_schema, AppSchema};
