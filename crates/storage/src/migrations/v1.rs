//! Migration v1: collections and activity records

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS collections (
    name TEXT PRIMARY KEY,
    metric TEXT NOT NULL DEFAULT 'cosine',
    dimension INTEGER,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS activities (
    collection TEXT NOT NULL REFERENCES collections(name) ON DELETE CASCADE,
    id TEXT NOT NULL,
    document TEXT NOT NULL,
    timestamp TEXT NOT NULL,
    app TEXT NOT NULL,
    description TEXT NOT NULL,
    embedding BLOB NOT NULL,
    updated_at TEXT NOT NULL,
    PRIMARY KEY (collection, id)
);
";
