use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Conversion and publishing
        .route("/api/preview", post(handlers::preview))
        .route("/api/convert-and-push", post(handlers::convert_and_push))
        // Published file records
        .route("/api/files/recent", get(handlers::recent_files))
        .route("/api/files/:id", get(handlers::get_file))
        // GitHub access check
        .route("/api/github/test", post(handlers::test_github_connection))
        // The UI may be served from another origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
