//! Axum HTTP adapter: webhook and health endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::app_router;
