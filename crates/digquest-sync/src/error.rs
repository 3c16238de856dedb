//! Error types for digquest-sync

use thiserror::Error;

/// Result type alias using digquest-sync's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in digquest-sync operations
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Entity has no server-assigned id and cannot be stored
    #[error("Entity is missing an id and cannot be stored")]
    MissingId,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Image decode/encode error
    #[error("Image error: {0}")]
    Image(String),
}
