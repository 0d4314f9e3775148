//! Error conversions - boundary rendering for [`AppError`]
//!
//! Renders [`AppError`] into the HTTP failure envelope when the `axum`
//! feature is enabled.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::{StatusCode, header};

        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::BAD_REQUEST);

        // Failure envelope: the body is the bare message text while the
        // content-type header claims JSON. The upstream contract fixes
        // both, inconsistency included.
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.into_message(),
        )
            .into_response()
    }
}
