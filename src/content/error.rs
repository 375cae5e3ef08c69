//! Error types for content loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading post front matter from disk.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A content file or directory could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON post index could not be parsed.
    #[error("Failed to parse post index {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The YAML front matter block of a markdown post could not be parsed.
    #[error("Failed to parse front matter in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A markdown post does not start with a `---` delimited front matter block.
    #[error("Missing front matter block in {}", .0.display())]
    MissingFrontMatter(PathBuf),

    /// Two posts share the same slug.
    #[error("Duplicate post slug: {0}")]
    DuplicateSlug(String),
}

/// Result alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
