use activity_log_core::EmbeddingConfig;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::api_types::{EmbeddingRequest, EmbeddingResponse};
use crate::credential::Credential;
use crate::error::EmbeddingError;
use crate::Embedder;

/// Longest provider error body kept in an error message.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Client for an OpenAI-compatible `/v1/embeddings` endpoint.
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    credential: Credential,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OpenAiEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiEmbedder")
            .field("credential", &self.credential)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiEmbedder {
    /// Creates a client that reads its key from `credential` on every call.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: &EmbeddingConfig, credential: Credential) -> Result<Self, EmbeddingError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmbeddingError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            credential,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let api_key = self.credential.require()?;
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
            EmbeddingError::InvalidCredential(
                "API key contains characters not allowed in an HTTP header".to_owned(),
            )
        })?;
        auth.set_sensitive(true);
        let request = EmbeddingRequest { model: &self.model, input: text };

        tracing::debug!(model = %self.model, chars = text.len(), "requesting embedding");

        let response = self
            .client
            .post(format!("{}/v1/embeddings", self.base_url))
            .header(AUTHORIZATION, auth)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = EmbeddingError::from_status(
                status.as_u16(),
                truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
            );
            tracing::warn!(status = status.as_u16(), error = %err, "embedding request failed");
            return Err(err);
        }

        let parsed: EmbeddingResponse = serde_json::from_str(&body).map_err(|e| {
            EmbeddingError::InvalidResponse(format!(
                "{e} (body: {})",
                truncate(&body, MAX_ERROR_BODY_LEN)
            ))
        })?;

        let embedding =
            parsed.data.into_iter().next().map(|d| d.embedding).ok_or(EmbeddingError::EmptyResult)?;
        if embedding.is_empty() {
            return Err(EmbeddingError::EmptyResult);
        }
        Ok(embedding)
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
