//! Database schema SQL.

/// Bumped whenever the table layout changes; a stored version that differs
/// marks the database as not populated.
pub const SCHEMA_VERSION: i64 = 1;

/// Name of the in-memory similarity index over `catalog.embedding`.
pub const CATALOG_EMBEDDING_INDEX: &str = "catalog_embedding_index";

/// Destructive schema reset: catalog, query cache, and bootstrap metadata.
pub const SCHEMA_SQL: &str = r#"
DROP TABLE IF EXISTS catalog;
DROP TABLE IF EXISTS searches;
DROP TABLE IF EXISTS store_meta;

CREATE TABLE catalog (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    embedding BLOB NOT NULL
);

CREATE TABLE searches (
    id INTEGER PRIMARY KEY,
    query TEXT NOT NULL,
    vector TEXT NOT NULL
);

CREATE UNIQUE INDEX searches_query_index ON searches(query);

CREATE TABLE store_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

pub const META_SCHEMA_VERSION: &str = "schema_version";
pub const META_DIMENSIONS: &str = "dimensions";
pub const META_BOOTSTRAP_COMPLETE: &str = "bootstrap_complete";
