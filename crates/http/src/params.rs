//! Extractor accepting parameters from either the query string or a JSON body.

use axum::Json;
use axum::extract::{FromRequest, Query, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::api_error::ApiError;

/// Parameters read from a JSON body when `Content-Type` is JSON, otherwise
/// from the query string.
#[derive(Debug)]
pub struct Params<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().starts_with("application/json"))
}

impl<S, T> FromRequest<S> for Params<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            return Ok(Self(value));
        }
        let Query(value) =
            Query::<T>::try_from_uri(req.uri()).map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(Self(value))
    }
}
