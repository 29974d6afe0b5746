/// Core error types for AlbumStore
use crate::types::AlbumId;
use thiserror::Error;

/// Result type alias using `AlbumError`
pub type Result<T> = std::result::Result<T, AlbumError>;

/// Core error type for AlbumStore
#[derive(Error, Debug)]
pub enum AlbumError {
    /// Album not found
    #[error("Album not found: {0}")]
    NotFound(AlbumId),

    /// Another album already uses this title
    #[error("Duplicate title: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl AlbumError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a duplicate title error
    pub fn duplicate(title: impl Into<String>) -> Self {
        Self::Duplicate(title.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for AlbumError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Duplicate(db_err.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}
