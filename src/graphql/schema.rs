use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::model::Author as ModelAuthor;
use crate::storage::RecordStore;

use super::types::*;

pub type ShelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<RecordStore>) -> ShelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// Single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(store(ctx)?.find_book(id).await.map(Book::from))
    }

    /// Single Author
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(store(ctx)?.find_author(id).await.map(Author::from))
    }

    /// List of Books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let books = store(ctx)?.books().await;
        Ok(books.into_iter().map(Book::from).collect())
    }

    /// List of Authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let authors = store(ctx)?.authors().await;
        Ok(authors.into_iter().map(Author::from).collect())
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let book = store(ctx)?.append_book(name, author_id).await;
        tracing::info!(id = book.id, author_id, name = %book.name, "added book");
        Ok(book.into())
    }

    /// add an author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        id: i32,
    ) -> async_graphql::Result<Author> {
        let author = store(ctx)?
            .append_author(ModelAuthor::new(id, name))
            .await;
        tracing::info!(id = author.id, name = %author.name, "added author");
        Ok(author.into())
    }
}
