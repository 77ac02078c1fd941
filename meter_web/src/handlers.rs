use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use crate::state::AppState;

/// One fresh fan-out per request. Caching is forbidden so every client
/// poll reflects a live upstream fetch.
pub async fn usage(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.manager.snapshot(&state.config).await;
    ([(header::CACHE_CONTROL, "no-store")], Json(snapshot))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
