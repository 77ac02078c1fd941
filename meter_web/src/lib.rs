mod handlers;
mod state;

use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/usage", get(handlers::usage))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}

/// Full application: API routes, request tracing, permissive CORS, and
/// the static dashboard bundle as fallback.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let static_service =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    router(state)
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
