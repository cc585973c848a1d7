//! `SQLite` activity store
//!
//! All methods are synchronous; [`crate::VectorStore`] wraps them for async callers.

// SQLite uses i64 for counts/limits, Rust uses usize - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]

mod activities;
mod collections;
mod query;

use activity_log_core::{DistanceMetric, StoreConfig};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use zerocopy::FromBytes;

use crate::error::StorageError;
use crate::migrations;
use crate::vec_init::init_sqlite_vec;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// A single named collection of activity vectors backed by a `SQLite` file.
#[derive(Clone, Debug)]
pub struct ActivityStore {
    pub(crate) pool: Pool<SqliteConnectionManager>,
    pub(crate) collection: String,
    pub(crate) metric: DistanceMetric,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Decode an f32 blob written by `zerocopy::IntoBytes`.
///
/// Blobs read back from SQLite carry no alignment guarantee, so each element
/// is copied out rather than reinterpreted in place.
pub(crate) fn decode_embedding(bytes: &[u8]) -> Result<Vec<f32>, StorageError> {
    let width = size_of::<f32>();
    if bytes.len() % width != 0 {
        return Err(StorageError::DataCorruption(format!(
            "embedding blob length {} is not a multiple of {width}",
            bytes.len()
        )));
    }
    bytes
        .chunks_exact(width)
        .map(|chunk| {
            f32::read_from_bytes(chunk)
                .map_err(|_| StorageError::DataCorruption("truncated embedding element".to_owned()))
        })
        .collect()
}

/// Custom connection initializer for sqlite-vec and concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    init_sqlite_vec();
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;",
    )?;
    Ok(())
}

impl ActivityStore {
    /// Open (or create) the database under `config.db_dir` and get-or-create
    /// the configured collection.
    pub fn open(config: &StoreConfig) -> Result<Self, StorageError> {
        init_sqlite_vec();
        std::fs::create_dir_all(&config.db_dir)?;

        let db_path = config.db_path();
        let manager = SqliteConnectionManager::file(&db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(config.pool_size.max(1)).build(manager)?;

        let conn = get_conn(&pool)?;
        migrations::run_migrations(&conn).map_err(|e| StorageError::Migration(e.to_string()))?;
        let metric = collections::get_or_create(&conn, &config.collection, config.metric)?;
        drop(conn);

        tracing::info!(
            path = %db_path.display(),
            collection = %config.collection,
            metric = %metric,
            pool_size = config.pool_size,
            "Activity store initialized"
        );

        Ok(Self { pool, collection: config.collection.clone(), metric })
    }

    /// Name of the collection this handle reads and writes.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Metric the collection was created with.
    #[must_use]
    pub const fn metric(&self) -> DistanceMetric {
        self.metric
    }
}
