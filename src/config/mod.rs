//! Process configuration: defaults in `types`, environment loading in `loader`.

pub mod types;
pub mod loader;

pub use types::*;
pub use loader::*;
