use std::sync::Arc;

use activity_log_core::{CollectionStats, LogActivity, MAX_QUERY_LIMIT, QueryResult};
use activity_log_embeddings::{Credential, Embedder};
use activity_log_storage::VectorStore;

use crate::ServiceError;

/// Upload, search and credential rotation over one embedder and one collection.
pub struct ActivityService {
    embedder: Arc<dyn Embedder>,
    store: Arc<dyn VectorStore>,
    credential: Credential,
}

impl ActivityService {
    /// `credential` must be the handle `embedder` reads its key from.
    #[must_use]
    pub fn new(
        embedder: Arc<dyn Embedder>,
        store: Arc<dyn VectorStore>,
        credential: Credential,
    ) -> Self {
        Self { embedder, store, credential }
    }

    /// Embed and persist one activity, returning the record id.
    ///
    /// A second upload with the same timestamp replaces the first.
    pub async fn log_activity(&self, input: LogActivity) -> Result<String, ServiceError> {
        input.validate().map_err(ServiceError::InvalidInput)?;

        let document = input.document();
        let embedding = self.embedder.embed(&document).await?;
        let record = input.into_record(embedding);
        self.store.insert(&record).await?;

        tracing::info!(
            id = %record.id,
            app = %record.metadata.app,
            dimension = record.embedding.len(),
            "activity logged"
        );
        Ok(record.id)
    }

    /// The `k` stored activities closest to `query`.
    pub async fn search(&self, query: &str, k: usize) -> Result<QueryResult, ServiceError> {
        let embedding = self.embedder.embed(query).await?;
        let result = self.store.query(&embedding, k.min(MAX_QUERY_LIMIT)).await?;
        tracing::debug!(k, hits = result.len(), "activity search complete");
        Ok(result)
    }

    /// Replace the provider key for every subsequent embedding call.
    pub fn set_api_key(&self, key: &str) -> Result<(), ServiceError> {
        self.credential.set(key)?;
        tracing::info!("embedding API key updated");
        Ok(())
    }

    pub async fn stats(&self) -> Result<CollectionStats, ServiceError> {
        Ok(self.store.stats().await?)
    }
}
