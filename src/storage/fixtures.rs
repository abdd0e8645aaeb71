//! Records loaded into the store at startup.

use crate::model::{Author, Book};

pub fn authors() -> Vec<Author> {
    vec![
        Author::new(1, "J. K. Rowling"),
        Author::new(2, "C.S. Lewis"),
        Author::new(3, "J.R. Tolkien"),
    ]
}

pub fn books() -> Vec<Book> {
    vec![
        Book::new(1, "Sorcerers Stone", 1),
        Book::new(2, "Chamber of Secrets", 1),
        Book::new(3, "Prisoner of Azkaban", 1),
        Book::new(4, "Horse and his Boy", 2),
        Book::new(5, "Magicians Nephew", 2),
        Book::new(6, "Last Battle", 2),
        Book::new(7, "Two Towers", 3),
        Book::new(8, "Fellowship of the Ring", 3),
    ]
}
