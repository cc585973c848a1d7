//! Embedding generation for activity search
//!
//! Wraps a remote OpenAI-compatible embeddings API behind the [`Embedder`]
//! trait. The API key lives in a shared [`Credential`] that can be replaced
//! while the server runs.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod api_types;
mod client;
mod credential;
pub mod error;

use async_trait::async_trait;

pub use client::{OpenAiEmbedder, truncate};
pub use credential::Credential;
pub use error::EmbeddingError;

/// Turns text into a fixed-width vector.
///
/// One call, one provider request: implementations neither retry nor cache.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}
