//! In-memory record storage.
//!
//! ## Components
//!
//! - [`RecordStore`]: append-only author and book collections
//! - Relationship lookups on the store: [`RecordStore::author_of`] and
//!   [`RecordStore::books_of`], recomputed by linear scan on every call
//! - [`fixtures`]: the records the server starts with

pub mod fixtures;
mod relations;
mod store;

pub use store::RecordStore;
