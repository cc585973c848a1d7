//! Typed error enum for the embeddings crate.

use thiserror::Error;

/// Errors from embedding generation.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("no API key configured; set OPENAI_API_KEY or call /set-api-key")]
    MissingCredential,
    #[error("embedding provider rejected the API key (HTTP {code}): {body}")]
    Authentication { code: u16, body: String },
    #[error("invalid API key: {0}")]
    InvalidCredential(String),
    #[error("embedding provider rate limit exceeded: {0}")]
    RateLimited(String),
    #[error("embedding provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("embedding provider rejected the request (HTTP {code}): {body}")]
    Rejected { code: u16, body: String },
    #[error("invalid embedding response: {0}")]
    InvalidResponse(String),
    #[error("embedding generation returned empty result")]
    EmptyResult,
    #[error("credential lock poisoned")]
    LockPoisoned,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl EmbeddingError {
    /// Classify a non-success HTTP status from the provider.
    #[must_use]
    pub fn from_status(code: u16, body: String) -> Self {
        match code {
            401 | 403 => Self::Authentication { code, body },
            429 => Self::RateLimited(body),
            500..=599 => Self::ProviderUnavailable(format!("HTTP {code}: {body}")),
            _ => Self::Rejected { code, body },
        }
    }

    /// Whether the caller supplied a missing or bad key.
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential | Self::InvalidCredential(_) | Self::Authentication { .. }
        )
    }
}

impl From<reqwest::Error> for EmbeddingError {
    fn from(err: reqwest::Error) -> Self {
        Self::ProviderUnavailable(err.to_string())
    }
}
