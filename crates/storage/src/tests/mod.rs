//! Test utilities and module declarations for storage tests.

use crate::ActivityStore;
use activity_log_core::{ActivityRecord, LogActivity, StoreConfig};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_store() -> (ActivityStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = ActivityStore::open(&StoreConfig::in_dir(temp_dir.path())).unwrap();
    (store, temp_dir)
}

pub fn create_test_record(timestamp: &str, app: &str, embedding: Vec<f32>) -> ActivityRecord {
    LogActivity::new(timestamp, app, format!("activity at {timestamp}")).into_record(embedding)
}
