//! Data models for the shelf.
//!
//! - [`Author`]: a writer, identified by a caller-chosen integer id
//! - [`Book`]: a title pointing at its author through `author_id`

mod author;
mod book;

pub use author::Author;
pub use book::Book;
