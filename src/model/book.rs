use super::Author;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub name: String,

    /// Foreign key into the author collection. Not enforced.
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    pub fn is_written_by(&self, author: &Author) -> bool {
        self.author_id == author.id
    }
}
