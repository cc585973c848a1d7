use std::sync::Arc;

use activity_log_core::{API_KEY_OK_MESSAGE, CollectionStats};
use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{MessageResponse, SetApiKeyRequest};
use crate::params::Params;

pub async fn set_api_key(
    State(state): State<Arc<AppState>>,
    Params(req): Params<SetApiKeyRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.activity_service.set_api_key(&req.key)?;
    Ok(Json(MessageResponse::new(API_KEY_OK_MESSAGE)))
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<CollectionStats>, ApiError> {
    Ok(Json(state.activity_service.stats().await?))
}
