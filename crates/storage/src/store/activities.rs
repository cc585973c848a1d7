use activity_log_core::{ActivityMetadata, ActivityRecord, CollectionStats};
use chrono::Utc;
use rusqlite::{OptionalExtension as _, TransactionBehavior, params};
use zerocopy::IntoBytes;

use super::{ActivityStore, collections, decode_embedding, get_conn};
use crate::error::StorageError;

impl ActivityStore {
    /// Persist `record` under its id, replacing any record with the same id.
    pub fn insert(&self, record: &ActivityRecord) -> Result<(), StorageError> {
        let mut conn = get_conn(&self.pool)?;
        // IMMEDIATE so two first inserts cannot both claim the collection width.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        collections::ensure_dimension(&tx, &self.collection, record.embedding.len())?;
        tx.execute(
            "INSERT INTO activities
                 (collection, id, document, timestamp, app, description, embedding, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(collection, id) DO UPDATE SET
                 document = excluded.document,
                 timestamp = excluded.timestamp,
                 app = excluded.app,
                 description = excluded.description,
                 embedding = excluded.embedding,
                 updated_at = excluded.updated_at",
            params![
                self.collection,
                record.id,
                record.document,
                record.metadata.timestamp,
                record.metadata.app,
                record.metadata.description,
                record.embedding.as_bytes(),
                Utc::now().to_rfc3339(),
            ],
        )?;
        tx.commit()?;
        tracing::debug!(collection = %self.collection, id = %record.id, "activity stored");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<ActivityRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let row = conn
            .query_row(
                "SELECT id, document, timestamp, app, description, embedding
                 FROM activities WHERE collection = ?1 AND id = ?2",
                params![self.collection, id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        ActivityMetadata {
                            timestamp: row.get(2)?,
                            app: row.get(3)?,
                            description: row.get(4)?,
                        },
                        row.get::<_, Vec<u8>>(5)?,
                    ))
                },
            )
            .optional()?;
        row.map(|(id, document, metadata, blob)| {
            Ok(ActivityRecord { id, document, embedding: decode_embedding(&blob)?, metadata })
        })
        .transpose()
    }

    /// Administrative removal. Returns whether a record was deleted.
    pub fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let removed = conn.execute(
            "DELETE FROM activities WHERE collection = ?1 AND id = ?2",
            params![self.collection, id],
        )?;
        if removed > 0 {
            collections::reset_dimension_if_empty(&conn, &self.collection)?;
        }
        Ok(removed > 0)
    }

    pub fn count(&self) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM activities WHERE collection = ?1",
            params![self.collection],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    pub fn stats(&self) -> Result<CollectionStats, StorageError> {
        let conn = get_conn(&self.pool)?;
        let dimension = collections::dimension(&conn, &self.collection)?;
        drop(conn);
        Ok(CollectionStats {
            collection: self.collection.clone(),
            metric: self.metric,
            dimension,
            count: self.count()?,
        })
    }
}
