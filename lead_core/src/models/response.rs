//! Response selection for the submission endpoint
//!
//! Response production is a pure function from (response mode, notification
//! outcome) to a tagged variant, kept separate from the side effects so it
//! can be tested without a server.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// How an accepted submission should be answered, decided from the
/// caller's `Content-Type` and `Accept` headers alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Script caller: answer with a JSON status object.
    Json,
    /// Plain browser form post: redirect to the static success page.
    Redirect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResponse {
    Accepted { email_sent: bool },
    AcceptedRedirect { location: String },
}

/// Picks the response for an accepted submission. The notification outcome
/// is metadata for script callers and silently dropped on the redirect
/// path, matching the plain-form contract.
pub fn select_response(mode: ResponseMode, email_sent: bool, redirect_to: &str) -> SubmitResponse {
    match mode {
        ResponseMode::Json => SubmitResponse::Accepted { email_sent },
        ResponseMode::Redirect => SubmitResponse::AcceptedRedirect {
            location: redirect_to.to_string(),
        },
    }
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            SubmitResponse::Accepted { email_sent } => Json(json!({
                "ok": true,
                "email_sent": email_sent,
            }))
            .into_response(),
            // Plain 302, not axum's 303/307 helpers.
            SubmitResponse::AcceptedRedirect { location } => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
        }
    }
}
