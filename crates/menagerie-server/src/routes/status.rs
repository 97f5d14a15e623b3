//! Store status route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use menagerie_store::VectorStore;
use tracing::error;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// GET /status: catalog and cache statistics.
async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.stats() {
        Ok(stats) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": if stats.bootstrap_complete { "ready" } else { "unprepared" },
                "service": "menagerie",
                "catalogItems": stats.catalog_items,
                "cachedQueries": stats.cached_queries,
                "dimensions": stats.dimensions,
                "schemaVersion": stats.schema_version,
                "dbSizeMb": stats.db_size_mb,
                "indexRows": stats.index_rows,
                "embeddingModel": state.config.embedding.model,
                "topK": state.orchestrator.options().top_k,
            })),
        ),
        Err(e) => {
            error!("Status query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "status": "error" })),
            )
        }
    }
}
