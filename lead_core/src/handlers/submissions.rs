//! The submission endpoint
//!
//! Accepts one POST from either lead-capture form, re-validates every
//! field server-side, appends a row to the submission log, attempts the
//! operator notification, and answers in the caller's mode. The log
//! append and the notification are independent best-effort steps: a
//! failure in either is logged but never rolls back the other or turns an
//! accepted submission into an error.

use crate::{
    error::Result,
    extractors::SubmissionPayload,
    models::{select_response, Submission, SubmitResponse},
    validation::validate_submission,
    AppState,
};
use axum::extract::State;
use tracing::{error, info, warn};

pub async fn handle_submit(
    State(state): State<AppState>,
    payload: SubmissionPayload,
) -> Result<SubmitResponse> {
    let submission = Submission::from_fields(&payload.fields);

    // Short-circuits with 400 before any side effect.
    validate_submission(&submission)?;

    info!(
        source = %submission.source,
        email = %submission.email,
        "accepted submission"
    );

    if let Err(e) = state.submission_log.append(&submission) {
        error!("failed to append submission to log: {}", e);
    }

    let email_sent = match &state.notifier {
        Some(notifier) => match notifier.notify(&submission).await {
            Ok(()) => true,
            Err(e) => {
                warn!("operator notification failed: {}", e);
                false
            }
        },
        None => false,
    };

    Ok(select_response(
        payload.mode,
        email_sent,
        &state.config.storage.success_redirect,
    ))
}
