//! # Shelf - a tiny GraphQL library catalogue
//!
//! Shelf serves two related in-memory record types, authors and books, over
//! a single GraphQL endpoint. Everything lives in process memory and is
//! reset to the seed fixture on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve http://localhost:5000/graphql (GraphiQL on GET)
//! shelf serve
//!
//! # One-off query against a fresh store
//! shelf query '{ books { name author { name } } }'
//!
//! # Print the schema
//! shelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP transport
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Data models (Author, Book)
//! - [`storage`]: In-memory record store and relationship lookups

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles the optional `.shelf.yml` file and server defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ShelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP transport.
pub mod graphql;

/// Data models for authors and books.
pub mod model;

/// In-memory record store.
pub mod storage;

/// Logging setup.
///
/// Installs the tracing subscriber: stderr, plus an optional JSON log file.
pub mod logging;
