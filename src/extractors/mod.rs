//! Request extractors with `AppError` rejections.

mod json;
pub use json::BookJson;
