use std::sync::atomic::{AtomicI32, Ordering};

use tokio::sync::RwLock;

use super::fixtures;
use crate::model::{Author, Book};

/// Append-only in-memory collections of authors and books.
///
/// Records are handed out as clones; nothing outside the store holds a
/// reference into its collections. Book ids come from a counter owned by
/// the store and are reserved while the book collection is write-locked, so
/// ids stay unique and ascending in insertion order.
#[derive(Debug)]
pub struct RecordStore {
    authors: RwLock<Vec<Author>>,
    books: RwLock<Vec<Book>>,
    next_book_id: AtomicI32,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new(), Vec::new())
    }

    /// A store holding the three authors and eight books served at startup.
    pub fn seeded() -> Self {
        Self::with_records(fixtures::authors(), fixtures::books())
    }

    pub fn with_records(authors: Vec<Author>, books: Vec<Book>) -> Self {
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            authors: RwLock::new(authors),
            books: RwLock::new(books),
            next_book_id: AtomicI32::new(next_book_id),
        }
    }

    /// Append an author exactly as given. The caller owns the id.
    pub async fn append_author(&self, author: Author) -> Author {
        let mut authors = self.authors.write().await;
        authors.push(author.clone());
        tracing::debug!(id = author.id, total = authors.len(), "appended author");
        author
    }

    /// Reserve the next book id and append the book under it.
    pub async fn append_book(&self, name: String, author_id: i32) -> Book {
        let mut books = self.books.write().await;
        let id = self.next_book_id.fetch_add(1, Ordering::SeqCst);
        let book = Book::new(id, name, author_id);
        books.push(book.clone());
        tracing::debug!(id, author_id, total = books.len(), "appended book");
        book
    }

    pub async fn find_author(&self, id: i32) -> Option<Author> {
        self.authors
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    pub async fn find_book(&self, id: i32) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    pub async fn authors(&self) -> Vec<Author> {
        self.authors.read().await.clone()
    }

    pub async fn books(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Scan every book, keeping those matching `predicate` in insertion order.
    pub(super) async fn books_where(&self, predicate: impl Fn(&Book) -> bool) -> Vec<Book> {
        self.books
            .read()
            .await
            .iter()
            .filter(|b| predicate(b))
            .cloned()
            .collect()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
