//! GraphQL schema, resolvers, and HTTP transport for the shelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server on the default port (5000)
//! shelf serve
//!
//! # Execute a query from the CLI
//! shelf query '{ author(id: 1) { name books { name } } }'
//!
//! # Execute a mutation from the CLI
//! shelf mutate 'addBook(name: "Goblet of Fire", authorId: 1) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `author`, `books`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, ShelfSchema, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::{Author, Book};
