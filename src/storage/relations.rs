use super::RecordStore;
use crate::model::{Author, Book};

impl RecordStore {
    /// The first author whose id matches the book's foreign key.
    ///
    /// A dangling `author_id` yields `None`.
    pub async fn author_of(&self, book: &Book) -> Option<Author> {
        self.find_author(book.author_id).await
    }

    /// Every book pointing at `author`, in insertion order.
    pub async fn books_of(&self, author: &Author) -> Vec<Book> {
        self.books_where(|b| b.is_written_by(author)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_author_of_follows_foreign_key() {
        let store = RecordStore::seeded();
        let book = store.find_book(4).await.unwrap();
        let author = store.author_of(&book).await.unwrap();
        assert_eq!(author.name, "C.S. Lewis");
    }

    #[tokio::test]
    async fn test_author_of_dangling_reference_is_none() {
        let store = RecordStore::seeded();
        let book = store.append_book("Orphan".to_string(), 404).await;
        assert!(store.author_of(&book).await.is_none());
    }

    #[tokio::test]
    async fn test_books_of_in_insertion_order() {
        let store = RecordStore::seeded();
        let tolkien = store.find_author(3).await.unwrap();
        store.append_book("Return of the King".to_string(), 3).await;

        let names: Vec<String> = store
            .books_of(&tolkien)
            .await
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(
            names,
            vec!["Two Towers", "Fellowship of the Ring", "Return of the King"]
        );
    }

    #[tokio::test]
    async fn test_books_of_author_without_books_is_empty() {
        let store = RecordStore::seeded();
        let author = store.append_author(Author::new(99, "Ursula K. Le Guin")).await;
        assert!(store.books_of(&author).await.is_empty());
    }

    #[tokio::test]
    async fn test_new_author_picks_up_existing_books() {
        let store = RecordStore::seeded();
        store.append_book("Earthsea".to_string(), 99).await;
        let author = store.append_author(Author::new(99, "Ursula K. Le Guin")).await;
        assert_eq!(store.books_of(&author).await.len(), 1);
    }
}
