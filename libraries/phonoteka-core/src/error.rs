/// Core error types for Phonoteka
use thiserror::Error;

/// Result type alias using `PhonotekaError`
pub type Result<T> = std::result::Result<T, PhonotekaError>;

/// Core error type for Phonoteka
#[derive(Error, Debug)]
pub enum PhonotekaError {
    /// Database source retrieval errors
    #[error("Database source error: {0}")]
    Source(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl PhonotekaError {
    /// Create a database source error
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
