//! The submission entity and its log-row layout

use crate::validation::clean;
use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label stored when the caller does not identify the originating form.
pub const DEFAULT_SOURCE: &str = "Website Booking Form";

/// Fixed header row of the submission log. Rows are written in exactly
/// this column order.
pub const LOG_COLUMNS: [&str; 10] = [
    "submittedAt",
    "name",
    "email",
    "phone",
    "date",
    "guests",
    "location",
    "referral",
    "source",
    "notes",
];

/// One validated form entry. Constructed transiently from request input,
/// persisted as a single log row, used to compose one notification, then
/// discarded. There is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub submitted_at: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub guests: String,
    pub location: String,
    pub referral: String,
    pub source: String,
    pub notes: String,
}

impl Submission {
    /// Builds a submission from the uniform key-value mapping produced by
    /// the payload extractor. Every field is sanitized, absent fields
    /// default to the empty string, `source` defaults to
    /// [`DEFAULT_SOURCE`] only when the caller did not send the field at
    /// all, and the timestamp is assigned here, at receipt time, as
    /// ISO-8601 with the local offset.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let field = |key: &str| fields.get(key).map(|v| clean(v)).unwrap_or_default();

        let source = match fields.get("source") {
            Some(value) => clean(value),
            None => DEFAULT_SOURCE.to_string(),
        };

        Self {
            submitted_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            date: field("date"),
            guests: field("guests"),
            location: field("location"),
            referral: field("referral"),
            source,
            notes: field("notes"),
        }
    }

    /// Field values in [`LOG_COLUMNS`] order.
    pub fn to_row(&self) -> [&str; 10] {
        [
            &self.submitted_at,
            &self.name,
            &self.email,
            &self.phone,
            &self.date,
            &self.guests,
            &self.location,
            &self.referral,
            &self.source,
            &self.notes,
        ]
    }
}
