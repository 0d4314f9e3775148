//! Cookie Handling
//!
//! Carries backend-issued session cookies back to the backend on the
//! follow-up request.

use http::{HeaderMap, header};

/// Join `Set-Cookie` response values into a single `Cookie` request value.
///
/// Each value is truncated at its first `;` (attributes such as `Path`
/// or `HttpOnly` are response metadata, not request material). The
/// remaining `name=value` pairs are joined with `"; "` per the `Cookie`
/// header format. Values that are not valid UTF-8 are skipped.
///
/// Returns an empty string when the response set no cookies.
pub fn join_set_cookie_values(headers: &HeaderMap) -> String {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
