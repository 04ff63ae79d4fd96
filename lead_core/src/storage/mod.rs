//! Append-only persistence for accepted submissions

pub mod csv_log;

pub use csv_log::SubmissionLog;
