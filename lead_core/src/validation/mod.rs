//! Input sanitization and validation for form submissions

pub mod rules;
pub mod sanitize;

pub use rules::{validate_email, validate_submission};
pub use sanitize::clean;
