//! Route tables: the book resource and service-level endpoints.

pub mod book;
pub mod common;
pub use book::{book_routes, BOOK_PREFIX};
pub use common::{common_routes, common_routes_with_ready};
