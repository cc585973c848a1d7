use std::sync::Arc;

use activity_log_core::{SEARCH_RESULT_LIMIT, UPLOAD_OK_MESSAGE};
use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{MessageResponse, SearchParams, SearchResponse, UploadParams};
use crate::params::Params;

pub async fn upload(
    State(state): State<Arc<AppState>>,
    Params(params): Params<UploadParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.activity_service.log_activity(params.into()).await?;
    Ok(Json(MessageResponse::new(UPLOAD_OK_MESSAGE)))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Params(params): Params<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let result = state.activity_service.search(&params.query, SEARCH_RESULT_LIMIT).await?;
    Ok(Json(result.into()))
}
