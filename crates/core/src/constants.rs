//! Shared constants for activity-log.

/// Number of nearest activities returned by a search request.
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// Upper bound on `k` accepted from local callers (CLI, stats tooling).
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Collection used when `ACTIVITY_LOG_COLLECTION` is not set.
pub const DEFAULT_COLLECTION: &str = "timelapse";

/// Directory holding the on-disk collection when `ACTIVITY_LOG_DB_DIR` is not set.
pub const DEFAULT_DB_DIR: &str = "./db";

/// File name of the SQLite database inside the collection directory.
pub const DB_FILE_NAME: &str = "activities.sqlite3";

/// Embedding endpoint root used when `ACTIVITY_LOG_EMBEDDING_URL` is not set.
pub const DEFAULT_EMBEDDING_URL: &str = "https://api.openai.com";

/// Embedding model used when `ACTIVITY_LOG_EMBEDDING_MODEL` is not set.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Seconds before an embedding request is abandoned.
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 60;

/// SQLite connection pool size.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// Environment variable holding the embedding provider API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Acknowledgement returned by a successful upload.
pub const UPLOAD_OK_MESSAGE: &str = "Activity logged successfully";

/// Acknowledgement returned by a successful key update.
pub const API_KEY_OK_MESSAGE: &str = "API key updated successfully";
