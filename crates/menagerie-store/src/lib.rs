//! Menagerie Store: SQLite catalog + query cache with cosine top-k search.

pub mod embedding;
pub mod schema;
pub mod sqlite;
pub mod types;
pub mod vector_store;

pub use sqlite::SqliteStore;
pub use types::*;
pub use vector_store::VectorStore;
