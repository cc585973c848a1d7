//! Collection bookkeeping: metric and vector width per named collection.

use activity_log_core::DistanceMetric;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension as _, params};

use crate::error::StorageError;

/// Create `name` if absent and return the metric it is ranked by.
///
/// A collection keeps the metric it was created with; a different requested
/// metric is ignored with a warning.
pub(crate) fn get_or_create(
    conn: &Connection,
    name: &str,
    requested: DistanceMetric,
) -> Result<DistanceMetric, StorageError> {
    conn.execute(
        "INSERT OR IGNORE INTO collections (name, metric, created_at) VALUES (?1, ?2, ?3)",
        params![name, requested.as_str(), Utc::now().to_rfc3339()],
    )?;
    let stored: String =
        conn.query_row("SELECT metric FROM collections WHERE name = ?1", params![name], |row| {
            row.get(0)
        })?;
    let metric: DistanceMetric = stored
        .parse()
        .map_err(|e: String| StorageError::DataCorruption(format!("collection '{name}': {e}")))?;
    if metric != requested {
        tracing::warn!(
            collection = name,
            stored = %metric,
            requested = %requested,
            "collection already exists with a different metric; keeping stored metric"
        );
    }
    Ok(metric)
}

/// Width of vectors stored in `name`, if any have been stored.
pub(crate) fn dimension(conn: &Connection, name: &str) -> Result<Option<usize>, StorageError> {
    let dim: Option<Option<i64>> = conn
        .query_row("SELECT dimension FROM collections WHERE name = ?1", params![name], |row| {
            row.get(0)
        })
        .optional()?;
    match dim {
        Some(d) => Ok(d.map(|v| v as usize)),
        None => Err(StorageError::DataCorruption(format!("collection '{name}' is missing"))),
    }
}

/// Check `actual` against the collection width, fixing the width on first use.
pub(crate) fn ensure_dimension(
    conn: &Connection,
    name: &str,
    actual: usize,
) -> Result<(), StorageError> {
    if actual == 0 {
        return Err(StorageError::EmptyEmbedding);
    }
    match dimension(conn, name)? {
        Some(expected) if expected != actual => Err(StorageError::DimensionMismatch {
            collection: name.to_owned(),
            expected,
            actual,
        }),
        Some(_) => Ok(()),
        None => {
            conn.execute(
                "UPDATE collections SET dimension = ?2 WHERE name = ?1",
                params![name, actual as i64],
            )?;
            tracing::info!(collection = name, dimension = actual, "collection dimension fixed");
            Ok(())
        },
    }
}

/// Forget the width once the collection holds no records.
pub(crate) fn reset_dimension_if_empty(conn: &Connection, name: &str) -> Result<(), StorageError> {
    conn.execute(
        "UPDATE collections SET dimension = NULL
         WHERE name = ?1 AND NOT EXISTS (SELECT 1 FROM activities WHERE collection = ?1)",
        params![name],
    )?;
    Ok(())
}
