//! Async storage trait and its `spawn_blocking` implementation for [`ActivityStore`].

use activity_log_core::{ActivityRecord, CollectionStats, QueryResult};
use async_trait::async_trait;

use crate::error::StorageError;
use crate::store::ActivityStore;

/// Vector collection operations used by the service layer.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Upsert `record` by id.
    async fn insert(&self, record: &ActivityRecord) -> Result<(), StorageError>;

    /// The `k` nearest records to `embedding`, nearest first.
    async fn query(&self, embedding: &[f32], k: usize) -> Result<QueryResult, StorageError>;

    async fn stats(&self) -> Result<CollectionStats, StorageError>;
}

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Unavailable(format!("spawn_blocking join error: {e}")))?
}

#[async_trait]
impl VectorStore for ActivityStore {
    async fn insert(&self, record: &ActivityRecord) -> Result<(), StorageError> {
        let store = self.clone();
        let record = record.clone();
        blocking(move || store.insert(&record)).await
    }

    async fn query(&self, embedding: &[f32], k: usize) -> Result<QueryResult, StorageError> {
        let store = self.clone();
        let embedding = embedding.to_vec();
        blocking(move || store.query(&embedding, k)).await
    }

    async fn stats(&self) -> Result<CollectionStats, StorageError> {
        let store = self.clone();
        blocking(move || store.stats()).await
    }
}
