//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON responses with a status code that
//! reflects where the failure came from. Provider and store details are
//! forwarded to the caller.

use activity_log_embeddings::EmbeddingError;
use activity_log_service::ServiceError;
use activity_log_storage::StorageError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: malformed or missing parameters.
    BadRequest(String),
    /// 401 Unauthorized: provider key missing or rejected.
    Unauthorized(String),
    /// 422 Unprocessable Entity: embedding does not fit the collection.
    UnprocessableEntity(String),
    /// 429 Too Many Requests: provider throttled the call.
    TooManyRequests(String),
    /// 500 Internal Server Error: failure inside this process.
    Internal(anyhow::Error),
    /// 502 Bad Gateway: provider answered with something unusable.
    BadGateway(String),
    /// 503 Service Unavailable: provider or store unreachable.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::TooManyRequests(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("internal server error: {err}"))
            },
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %message, "request failed");
        }
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::Embedding(e) => match e {
                EmbeddingError::MissingCredential
                | EmbeddingError::InvalidCredential(_)
                | EmbeddingError::Authentication { .. } => {
                    Self::Unauthorized(message)
                },
                EmbeddingError::RateLimited(_) => Self::TooManyRequests(message),
                EmbeddingError::ProviderUnavailable(_) => Self::ServiceUnavailable(message),
                EmbeddingError::Rejected { .. }
                | EmbeddingError::InvalidResponse(_)
                | EmbeddingError::EmptyResult => Self::BadGateway(message),
                EmbeddingError::LockPoisoned | EmbeddingError::ClientInit(_) => {
                    Self::Internal(anyhow::anyhow!(message))
                },
            },
            ServiceError::Storage(e) => match e {
                StorageError::DimensionMismatch { .. } | StorageError::EmptyEmbedding => {
                    Self::UnprocessableEntity(message)
                },
                StorageError::Unavailable(_) | StorageError::Database(_) => {
                    Self::ServiceUnavailable(message)
                },
                StorageError::DataCorruption(_) | StorageError::Migration(_) => {
                    Self::Internal(anyhow::anyhow!(message))
                },
            },
        }
    }
}
