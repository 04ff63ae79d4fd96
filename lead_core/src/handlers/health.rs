use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let submissions_logged = state.submission_log.row_count().unwrap_or(0);

    Json(json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "timestamp": chrono::Utc::now().timestamp(),
        "submissions_logged": submissions_logged,
        "mail_enabled": state.notifier.is_some(),
    }))
}
