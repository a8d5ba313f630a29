//! HTTP handlers for the book resource.

pub mod book;
pub use book::*;
