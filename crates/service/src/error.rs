//! Typed error enum for the service layer.
//!
//! Unifies embedding and storage failures so handlers can match on the
//! failure mode instead of downcasting.

use activity_log_embeddings::EmbeddingError;
use activity_log_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying embedding and storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Embedding provider call failed.
    #[error("embedding: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Activity store operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether the caller's credential is missing or was rejected.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Embedding(e) if e.is_authentication())
    }

    /// Whether the persistence layer could not be reached or written.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_unavailable())
    }
}
