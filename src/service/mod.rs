//! BookService: book persistence against SQLite.

mod crud;
mod validation;
pub use crud::BookService;
pub use validation::{validate_new_book, MAX_TITLE_LENGTH};
