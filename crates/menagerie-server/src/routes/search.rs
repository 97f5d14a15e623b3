//! Search route. The request body is the raw query as `text/plain`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::error;

use crate::state::AppState;

const NO_STORE: &str = "no-cache, no-store";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/search",
        post(search).fallback(|| async { StatusCode::METHOD_NOT_ALLOWED }),
    )
}

/// Accepts `text/plain`, optionally with parameters such as a charset.
fn is_plain_text(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("text/plain"))
        .unwrap_or(false)
}

/// POST /search: nearest catalog items as `[{id, name, description}]`.
async fn search(State(state): State<Arc<AppState>>, headers: HeaderMap, body: String) -> Response {
    if !is_plain_text(&headers) {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.orchestrator.search(&body).await {
        Ok(items) => ([(CACHE_CONTROL, NO_STORE)], Json(items)).into_response(),
        Err(e) => {
            error!("Search failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CACHE_CONTROL, NO_STORE)],
                Json(serde_json::json!({ "error": "search failed" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_plain_text(&headers));

        headers.insert(CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(is_plain_text(&headers));

        headers.insert(CONTENT_TYPE, "Text/Plain; charset=utf-8".parse().unwrap());
        assert!(is_plain_text(&headers));

        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());
        assert!(!is_plain_text(&headers));
    }
}
