pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

/// Headroom over the upload limit for multipart boundaries and the other fields.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/profile", get(handlers::handle_get_profile))
        .route("/api/v1/profile/parse", post(handlers::handle_parse_resume))
        .route("/api/v1/profile/upload", post(handlers::handle_upload_resume))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
