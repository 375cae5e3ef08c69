//! Blog content module.
//!
//! Provides the post front matter model and loaders for local content.

pub mod error;
pub mod loader;
pub mod models;

pub use loader::load_posts;
pub use models::{DateLocale, PostFrontMatter};
