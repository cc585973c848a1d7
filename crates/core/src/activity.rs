//! Activity records and the inputs that produce them.

use serde::{Deserialize, Serialize};

/// Metadata stored alongside every activity embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityMetadata {
    pub timestamp: String,
    pub app: String,
    pub description: String,
}

/// A logged activity as it is persisted in the collection.
///
/// `id` is the caller-supplied timestamp; writing a second record with the
/// same id replaces the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    /// Text that was embedded to produce `embedding`.
    pub document: String,
    pub embedding: Vec<f32>,
    pub metadata: ActivityMetadata,
}

/// Upload request for a single activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogActivity {
    pub timestamp: String,
    pub app_name: String,
    pub description: String,
}

impl LogActivity {
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        app_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            app_name: app_name.into(),
            description: description.into(),
        }
    }

    /// The timestamp doubles as the record id, so it cannot be blank.
    pub fn validate(&self) -> Result<(), String> {
        if self.timestamp.trim().is_empty() {
            return Err("timestamp must not be empty".to_owned());
        }
        Ok(())
    }

    /// Text sent to the embedding provider: `"{timestamp} - {app_name} - {description}"`.
    #[must_use]
    pub fn document(&self) -> String {
        format!("{} - {} - {}", self.timestamp, self.app_name, self.description)
    }

    #[must_use]
    pub fn metadata(&self) -> ActivityMetadata {
        ActivityMetadata {
            timestamp: self.timestamp.clone(),
            app: self.app_name.clone(),
            description: self.description.clone(),
        }
    }

    /// Attach an embedding, producing the record to persist.
    #[must_use]
    pub fn into_record(self, embedding: Vec<f32>) -> ActivityRecord {
        let document = self.document();
        let metadata = self.metadata();
        ActivityRecord { id: self.timestamp, document, embedding, metadata }
    }
}

/// One nearest-neighbour hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMatch {
    pub id: String,
    pub document: String,
    pub metadata: ActivityMetadata,
    /// Distance under the collection metric; smaller is closer.
    pub distance: f32,
}

/// Query hits ordered nearest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub matches: Vec<ActivityMatch>,
}

impl QueryResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Shape and size of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub collection: String,
    pub metric: DistanceMetric,
    /// Width of stored vectors; `None` until the first insert.
    pub dimension: Option<usize>,
    pub count: usize,
}

/// Distance function used to rank a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    #[default]
    Cosine,
    L2,
}

impl DistanceMetric {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cosine => "cosine",
            Self::L2 => "l2",
        }
    }
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(Self::Cosine),
            "l2" | "euclidean" => Ok(Self::L2),
            other => Err(format!("unknown distance metric: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_joins_fields_with_dashes() {
        let input = LogActivity::new("2024-01-01T10:00:00Z", "editor", "wrote report");
        assert_eq!(input.document(), "2024-01-01T10:00:00Z - editor - wrote report");
    }

    #[test]
    fn into_record_uses_timestamp_as_id() {
        let record = LogActivity::new("t1", "term", "ran tests").into_record(vec![0.5, 0.5]);
        assert_eq!(record.id, "t1");
        assert_eq!(record.document, "t1 - term - ran tests");
        assert_eq!(
            record.metadata,
            ActivityMetadata {
                timestamp: "t1".to_owned(),
                app: "term".to_owned(),
                description: "ran tests".to_owned(),
            }
        );
    }

    #[test]
    fn validate_rejects_blank_timestamp() {
        assert!(LogActivity::new("  ", "editor", "x").validate().is_err());
        assert!(LogActivity::new("t", "", "").validate().is_ok());
    }

    #[test]
    fn metric_parses_aliases() {
        assert_eq!("COSINE".parse::<DistanceMetric>(), Ok(DistanceMetric::Cosine));
        assert_eq!("euclidean".parse::<DistanceMetric>(), Ok(DistanceMetric::L2));
        assert!("dot".parse::<DistanceMetric>().is_err());
    }
}
