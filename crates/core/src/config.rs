//! Process configuration assembled from the environment.

use std::path::PathBuf;

use crate::{
    API_KEY_ENV, DB_FILE_NAME, DEFAULT_COLLECTION, DEFAULT_DB_DIR, DEFAULT_DB_POOL_SIZE,
    DEFAULT_EMBEDDING_MODEL, DEFAULT_EMBEDDING_TIMEOUT_SECS, DEFAULT_EMBEDDING_URL,
    DistanceMetric, env_parse_with_default, env_string, env_string_with_default,
};

/// Where and how to reach the embedding provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EMBEDDING_URL.to_owned(),
            model: DEFAULT_EMBEDDING_MODEL.to_owned(),
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}

impl EmbeddingConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_string_with_default("ACTIVITY_LOG_EMBEDDING_URL", DEFAULT_EMBEDDING_URL),
            model: env_string_with_default("ACTIVITY_LOG_EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            timeout_secs: env_parse_with_default(
                "ACTIVITY_LOG_EMBEDDING_TIMEOUT_SECS",
                DEFAULT_EMBEDDING_TIMEOUT_SECS,
            ),
        }
    }

    /// Point the client at a different provider root (tests, self-hosted gateways).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// On-disk location and shape of the activity collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_dir: PathBuf,
    pub collection: String,
    pub pool_size: u32,
    pub metric: DistanceMetric,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_dir: PathBuf::from(DEFAULT_DB_DIR),
            collection: DEFAULT_COLLECTION.to_owned(),
            pool_size: DEFAULT_DB_POOL_SIZE,
            metric: DistanceMetric::default(),
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            db_dir: PathBuf::from(env_string_with_default("ACTIVITY_LOG_DB_DIR", DEFAULT_DB_DIR)),
            collection: env_string_with_default("ACTIVITY_LOG_COLLECTION", DEFAULT_COLLECTION),
            pool_size: env_parse_with_default("ACTIVITY_LOG_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE),
            metric: env_string("ACTIVITY_LOG_DISTANCE_METRIC")
                .and_then(|m| match m.parse() {
                    Ok(metric) => Some(metric),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring ACTIVITY_LOG_DISTANCE_METRIC");
                        None
                    },
                })
                .unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn in_dir(db_dir: impl Into<PathBuf>) -> Self {
        Self { db_dir: db_dir.into(), ..Self::default() }
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.db_dir.join(DB_FILE_NAME)
    }
}

/// Everything the binary needs to start.
#[derive(Clone, Default)]
pub struct AppConfig {
    /// Initial provider key; `None` means uploads fail until one is set at runtime.
    pub api_key: Option<String>,
    pub embedding: EmbeddingConfig,
    pub store: StoreConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("embedding", &self.embedding)
            .field("store", &self.store)
            .finish()
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env_string(API_KEY_ENV),
            embedding: EmbeddingConfig::from_env(),
            store: StoreConfig::from_env(),
        }
    }
}
