//! Request and response bodies.

use activity_log_core::{ActivityMetadata, LogActivity, QueryResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SetApiKeyRequest {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub timestamp: String,
    pub app_name: String,
    pub description: String,
}

impl From<UploadParams> for LogActivity {
    fn from(p: UploadParams) -> Self {
        Self::new(p.timestamp, p.app_name, p.description)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Search hits, one inner list per query text (always exactly one).
///
/// `matches` holds the embedded documents; the other fields are parallel to it.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub matches: Vec<Vec<String>>,
    pub ids: Vec<Vec<String>>,
    pub metadatas: Vec<Vec<ActivityMetadata>>,
    pub distances: Vec<Vec<f32>>,
}

impl From<QueryResult> for SearchResponse {
    fn from(result: QueryResult) -> Self {
        let mut documents = Vec::with_capacity(result.len());
        let mut ids = Vec::with_capacity(result.len());
        let mut metadatas = Vec::with_capacity(result.len());
        let mut distances = Vec::with_capacity(result.len());
        for m in result.matches {
            documents.push(m.document);
            ids.push(m.id);
            metadatas.push(m.metadata);
            distances.push(m.distance);
        }
        Self {
            matches: vec![documents],
            ids: vec![ids],
            metadatas: vec![metadatas],
            distances: vec![distances],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}
