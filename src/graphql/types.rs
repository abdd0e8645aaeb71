use std::sync::Arc;

use async_graphql::{Context, Object};

use crate::model::{Author as ModelAuthor, Book as ModelBook};
use crate::storage::RecordStore;

pub(crate) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<RecordStore>> {
    ctx.data::<Arc<RecordStore>>()
}

pub struct Book(ModelBook);

/// This is a book
#[Object]
impl Book {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    #[graphql(name = "authorID")]
    async fn author_id(&self) -> i32 {
        self.0.author_id
    }

    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let author = store(ctx)?.author_of(&self.0).await;
        Ok(author.map(Author::from))
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self(b)
    }
}

pub struct Author(ModelAuthor);

/// This is the author
#[Object]
impl Author {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let books = store(ctx)?.books_of(&self.0).await;
        Ok(books.into_iter().map(Book::from).collect())
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self(a)
    }
}
