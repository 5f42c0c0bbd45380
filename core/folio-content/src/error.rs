//! Error types for the content layer.

use thiserror::Error;

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur while reading case studies.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No content file matches the requested slug.
    #[error("case study not found: {0}")]
    NotFound(String),

    /// The front-matter block is not valid YAML.
    #[error("invalid front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}
