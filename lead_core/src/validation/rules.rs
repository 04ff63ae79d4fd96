//! Validation rules for accepted submissions

use crate::error::{AppError, Result};
use crate::models::Submission;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();
}

pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Checks a sanitized submission in the order the endpoint promises:
/// required-field presence first, then email format. The first failing
/// check wins and its message is returned verbatim to the caller.
pub fn validate_submission(submission: &Submission) -> Result<()> {
    if submission.name.is_empty() || submission.email.is_empty() || submission.phone.is_empty() {
        return Err(AppError::Validation(
            "Please include name, email and phone.".to_string(),
        ));
    }

    if !validate_email(&submission.email) {
        return Err(AppError::Validation("Invalid email address.".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn submission_from(pairs: &[(&str, &str)]) -> Submission {
        let fields: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Submission::from_fields(&fields)
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com"));
        assert!(validate_email("jo@x.com"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let missing_phone = submission_from(&[("name", "Jo"), ("email", "jo@x.com")]);
        let err = validate_submission(&missing_phone).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let missing_name = submission_from(&[("email", "jo@x.com"), ("phone", "555-1111")]);
        assert!(validate_submission(&missing_name).is_err());

        let empty = submission_from(&[]);
        assert!(validate_submission(&empty).is_err());
    }

    #[test]
    fn test_required_check_runs_before_email_format() {
        // Missing name and malformed email: the presence message wins.
        let submission = submission_from(&[("email", "not-an-email"), ("phone", "555-1111")]);
        match validate_submission(&submission) {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Please include name, email and phone.")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_email_rejected() {
        let submission = submission_from(&[
            ("name", "Jo"),
            ("email", "not-an-email"),
            ("phone", "555-1111"),
        ]);
        match validate_submission(&submission) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Invalid email address."),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_submission_accepted() {
        let submission = submission_from(&[
            ("name", "Jo"),
            ("email", "jo@x.com"),
            ("phone", "555-1111"),
        ]);
        assert!(validate_submission(&submission).is_ok());
    }

    #[test]
    fn test_whitespace_only_required_field_rejected() {
        // Sanitization trims before validation sees the value.
        let submission = submission_from(&[
            ("name", "   "),
            ("email", "jo@x.com"),
            ("phone", "555-1111"),
        ]);
        assert!(validate_submission(&submission).is_err());
    }
}
