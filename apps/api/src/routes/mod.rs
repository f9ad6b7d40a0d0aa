pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::negotiation::handlers::handle_negotiate;
use crate::pricing::handlers::handle_calculate;
use crate::state::AppState;

/// Largest accepted request body.
const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/calculate", post(handle_calculate))
        .route("/api/negotiate", post(handle_negotiate))
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
