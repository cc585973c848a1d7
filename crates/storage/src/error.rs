//! Typed error enum for the storage layer.
//!
//! Lets callers tell an unreachable store apart from a rejected write
//! instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database file or connection pool cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// SQL execution failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// Vector width disagrees with the vectors already in the collection.
    #[error(
        "embedding dimension mismatch in collection '{collection}': expected {expected}, got {actual}"
    )]
    DimensionMismatch { collection: String, expected: usize, actual: usize },

    /// A zero-length embedding was supplied.
    #[error("embedding must not be empty")]
    EmptyEmbedding,

    /// Row data could not be decoded into a domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether the failure means the persistence layer could not be reached or written.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Unavailable(_) => true,
            Self::Database(rusqlite::Error::SqliteFailure(e, _)) => matches!(
                e.code,
                rusqlite::ErrorCode::DatabaseBusy
                    | rusqlite::ErrorCode::DatabaseLocked
                    | rusqlite::ErrorCode::CannotOpen
                    | rusqlite::ErrorCode::SystemIoFailure
                    | rusqlite::ErrorCode::DiskFull
                    | rusqlite::ErrorCode::ReadOnly
            ),
            _ => false,
        }
    }

    /// Whether the caller supplied a vector the collection cannot hold.
    pub const fn is_invalid_embedding(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. } | Self::EmptyEmbedding)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err)
    }
}

impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        Self::Unavailable(format!("failed to get connection from pool: {err}"))
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}
