//! HTTP reason phrases.

use http::StatusCode;

/// Standard reason phrase for an HTTP status code, or `""` when the code is
/// not recognised.
pub fn reason_phrase(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}
