//! Nearest-neighbour lookup

use activity_log_core::{ActivityMatch, ActivityMetadata, DistanceMetric, QueryResult};
use rusqlite::params;
use zerocopy::IntoBytes;

use super::{ActivityStore, collections, get_conn};
use crate::error::StorageError;

const fn distance_fn(metric: DistanceMetric) -> &'static str {
    match metric {
        DistanceMetric::Cosine => "vec_distance_cosine",
        DistanceMetric::L2 => "vec_distance_l2",
    }
}

impl ActivityStore {
    /// The `k` records closest to `embedding`, nearest first.
    ///
    /// An empty collection yields an empty result, not an error. Distances
    /// that are undefined (zero vectors under cosine) rank last.
    pub fn query(&self, embedding: &[f32], k: usize) -> Result<QueryResult, StorageError> {
        if k == 0 {
            return Ok(QueryResult::default());
        }

        let conn = get_conn(&self.pool)?;

        let Some(expected) = collections::dimension(&conn, &self.collection)? else {
            tracing::debug!(collection = %self.collection, "query against empty collection");
            return Ok(QueryResult::default());
        };
        if expected != embedding.len() {
            return Err(StorageError::DimensionMismatch {
                collection: self.collection.clone(),
                expected,
                actual: embedding.len(),
            });
        }

        let sql = format!(
            "SELECT id, document, timestamp, app, description,
                    {}(embedding, ?2) AS distance
             FROM activities
             WHERE collection = ?1
             ORDER BY distance IS NULL, distance ASC, rowid ASC
             LIMIT ?3",
            distance_fn(self.metric)
        );
        let mut stmt = conn.prepare(&sql)?;
        let limit = i64::try_from(k).unwrap_or(i64::MAX);

        let matches = stmt
            .query_map(params![self.collection, embedding.as_bytes(), limit], |row| {
                Ok(ActivityMatch {
                    id: row.get(0)?,
                    document: row.get(1)?,
                    metadata: ActivityMetadata {
                        timestamp: row.get(2)?,
                        app: row.get(3)?,
                        description: row.get(4)?,
                    },
                    distance: row.get::<_, Option<f64>>(5)?.map_or(f32::NAN, |d| d as f32),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(collection = %self.collection, k, hits = matches.len(), "query complete");
        Ok(QueryResult { matches })
    }
}
