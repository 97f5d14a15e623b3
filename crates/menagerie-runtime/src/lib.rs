//! Menagerie Runtime: catalog bootstrap and the search pipeline.
//!
//! `CatalogLoader` fills an empty store from the static dataset once;
//! `SearchOrchestrator` answers queries through the normalized-query cache
//! and the store's similarity index.

mod blocking;
pub mod cache;
pub mod catalog;
pub mod normalize;
pub mod orchestrator;
pub mod types;

pub use cache::{CacheTier, QueryCache};
pub use catalog::{load_dataset, CatalogLoader};
pub use normalize::{is_valid_query, normalize};
pub use orchestrator::SearchOrchestrator;
pub use types::*;
