//! HTTP route definitions.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};

/// Builds the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/callback", post(handlers::callback))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
