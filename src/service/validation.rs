//! Create-payload validation.

use crate::error::AppError;
use crate::model::NewBook;

pub const MAX_TITLE_LENGTH: usize = 255;

/// Title must be non-blank and at most `MAX_TITLE_LENGTH` characters.
pub fn validate_new_book(book: &NewBook) -> Result<(), AppError> {
    if book.title.trim().is_empty() {
        return Err(AppError::Validation("title is required".into()));
    }
    if book.title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::Validation(format!(
            "title must be at most {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}
