mod author;
mod id;
mod isbn;
mod pages;
mod title;

pub use self::{author::*, id::*, isbn::*, pages::*, title::*};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

/// Catalogue data of a book. Has no identity of its own and is replaced as a whole on edit.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Book {
    isbn: Isbn13,
    title: Title,
    authors: Vec<Author>,
    number_of_pages: Option<NumberOfPages>,
}

impl Book {
    pub fn new(
        isbn: Isbn13,
        title: Title,
        authors: Vec<Author>,
        number_of_pages: Option<NumberOfPages>,
    ) -> Self {
        Self {
            isbn,
            title,
            authors,
            number_of_pages,
        }
    }
}
