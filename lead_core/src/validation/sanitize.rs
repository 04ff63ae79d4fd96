//! Free-text sanitization applied to every submitted field

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_PATTERN: Regex = Regex::new(r"<[^>]*>").unwrap();

    // Raw and percent-encoded CR/LF. Anything that survives into the
    // notification headers would let a submitter inject extra header lines.
    static ref CRLF_PATTERN: Regex = Regex::new(r"(?i)(\r\n|\r|\n|%0d%0a|%0d|%0a)").unwrap();
}

/// Trims surrounding whitespace, strips markup tags, and collapses every
/// raw or percent-encoded CR/LF occurrence into a single space.
///
/// Idempotent: applying it twice yields the same result as once.
pub fn clean(value: &str) -> String {
    let trimmed = value.trim();
    let stripped = TAG_PATTERN.replace_all(trimmed, "");
    let flattened = CRLF_PATTERN.replace_all(&stripped, " ");
    flattened.trim().to_string()
}
