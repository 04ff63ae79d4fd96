//! Best-effort operator notification
//!
//! One plain-text message per accepted submission, addressed to the
//! configured operator, with the submitter's sanitized address as the
//! reply-to. Delivery is fire and forget with respect to the caller
//! visible contract: the outcome only feeds the `email_sent` flag.

pub mod smtp;

use crate::error::Result;
use crate::models::Submission;
use async_trait::async_trait;

pub use smtp::SmtpNotifier;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, submission: &Submission) -> Result<()>;
}

pub fn notification_subject(submission: &Submission) -> String {
    format!("New booking: {}", submission.name)
}

/// Plain-text body listing every field. All values have been through
/// sanitization, so none can carry a CR/LF into the message.
pub fn compose_notification(submission: &Submission) -> String {
    format!(
        "New booking received:\n\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Date: {}\n\
         Guests: {}\n\
         Location: {}\n\
         Referral: {}\n\
         Source: {}\n\n\
         Notes:\n{}\n",
        submission.name,
        submission.email,
        submission.phone,
        submission.date,
        submission.guests,
        submission.location,
        submission.referral,
        submission.source,
        submission.notes,
    )
}
