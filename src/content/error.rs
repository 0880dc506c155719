//! Errors raised while loading blog content

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read post {path:?}: {source}")]
    ReadPost {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid front-matter in {path:?}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("Invalid post slug: {0:?}")]
    InvalidSlug(String),
}

impl ContentError {
    /// True when the requested post file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ContentError::ReadPost { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
