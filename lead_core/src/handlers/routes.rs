//! Route table for the lead-capture service

use crate::{
    handlers::{health::handle_health, submissions::handle_submit},
    AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::services::ServeDir;

/// One POST route for both forms, a health probe, and the static
/// marketing site as the fallback (index, success page, the browser form
/// controller).
pub fn create_routes(site_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/submissions", post(handle_submit))
        .fallback_service(ServeDir::new(site_dir))
}
