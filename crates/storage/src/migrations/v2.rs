//! Migration v2: per-app lookup index

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_activities_app ON activities(collection, app);
CREATE INDEX IF NOT EXISTS idx_activities_updated ON activities(collection, updated_at);
";
