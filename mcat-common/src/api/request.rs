//! Request checks shared by every entity handler
//!
//! Pure functions, no HTTP framework types.

/// Only media type accepted for write operations
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Check a declared content type against `application/json`
///
/// Parameters such as `charset` are ignored and the media type is compared
/// case-insensitively. A missing header is not JSON.
///
/// # Examples
///
/// ```
/// use mcat_common::api::request::is_json_content_type;
///
/// assert!(is_json_content_type(Some("application/json")));
/// assert!(is_json_content_type(Some("Application/JSON; charset=utf-8")));
/// assert!(!is_json_content_type(Some("text/plain")));
/// assert!(!is_json_content_type(None));
/// ```
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
        .unwrap_or(false)
}

/// Parse a path identifier; only positive integers are valid
///
/// # Examples
///
/// ```
/// use mcat_common::api::request::parse_id;
///
/// assert_eq!(parse_id("12"), Some(12));
/// assert_eq!(parse_id("abc"), None);
/// assert_eq!(parse_id("0"), None);
/// ```
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Present, not blank, at most `max` characters
pub fn required_text(value: Option<&str>, max: usize) -> bool {
    match value {
        Some(text) => !text.trim().is_empty() && text.chars().count() <= max,
        None => false,
    }
}

/// Absent, or at most `max` characters
pub fn optional_text(value: Option<&str>, max: usize) -> bool {
    value.map_or(true, |text| text.chars().count() <= max)
}
