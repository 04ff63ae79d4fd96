//! Extractor for the dual-format submission payload
//!
//! The two marketing forms reach the endpoint either as a JSON body (the
//! browser controller) or as a conventional form-encoded post (no-JS
//! fallback). Extraction is one parse step producing a uniform key-value
//! mapping: the raw body is tried as a JSON object first, then as
//! form-encoded fields, and an unparseable body simply yields an empty
//! mapping for validation to reject.

use crate::error::AppError;
use crate::models::ResponseMode;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use std::collections::HashMap;

pub struct SubmissionPayload {
    pub fields: HashMap<String, String>,
    pub mode: ResponseMode,
}

#[async_trait]
impl<S> FromRequest<S> for SubmissionPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mode = detect_mode(req.headers());

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Other(anyhow::anyhow!("failed to read request body: {}", e)))?;

        Ok(Self {
            fields: parse_fields(&body),
            mode,
        })
    }
}

/// JSON mode when `Content-Type` or `Accept` mentions `application/json`.
/// Treating a non-empty raw body as a JSON indicator is deliberately
/// avoided; it would misclassify form posts read through a raw body
/// reader.
fn detect_mode(headers: &HeaderMap) -> ResponseMode {
    let header_mentions_json = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false)
    };

    if header_mentions_json(header::CONTENT_TYPE) || header_mentions_json(header::ACCEPT) {
        ResponseMode::Json
    } else {
        ResponseMode::Redirect
    }
}

fn parse_fields(body: &[u8]) -> HashMap<String, String> {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_slice::<serde_json::Value>(body) {
        return map
            .into_iter()
            .map(|(key, value)| (key, value_to_string(value)))
            .collect();
    }

    serde_urlencoded::from_bytes::<HashMap<String, String>>(body).unwrap_or_default()
}

fn value_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_json_body_parsed_as_mapping() {
        let fields = parse_fields(br#"{"name":"Jo","email":"jo@x.com","guests":12}"#);
        assert_eq!(fields.get("name").unwrap(), "Jo");
        assert_eq!(fields.get("email").unwrap(), "jo@x.com");
        assert_eq!(fields.get("guests").unwrap(), "12");
    }

    #[test]
    fn test_form_body_used_as_fallback() {
        let fields = parse_fields(b"name=Jo&email=jo%40x.com&phone=555-1111");
        assert_eq!(fields.get("name").unwrap(), "Jo");
        assert_eq!(fields.get("email").unwrap(), "jo@x.com");
        assert_eq!(fields.get("phone").unwrap(), "555-1111");
    }

    #[test]
    fn test_non_object_json_falls_back_to_form_parsing() {
        // A bare JSON array is not a structured mapping.
        let fields = parse_fields(b"[1,2,3]");
        assert!(fields.is_empty());
    }

    #[test]
    fn test_unparseable_body_yields_empty_mapping() {
        assert!(parse_fields(b"").is_empty());
    }

    #[test]
    fn test_mode_from_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        assert_eq!(detect_mode(&headers), ResponseMode::Json);
    }

    #[test]
    fn test_mode_from_accept() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain"),
        );
        assert_eq!(detect_mode(&headers), ResponseMode::Json);
    }

    #[test]
    fn test_plain_form_post_is_redirect_mode() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        assert_eq!(detect_mode(&headers), ResponseMode::Redirect);
    }
}
