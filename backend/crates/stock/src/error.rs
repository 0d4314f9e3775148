//! Stock Forwarding Error Types
//!
//! This module provides forwarding-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Stock-specific result type alias
pub type StockResult<T> = Result<T, StockError>;

/// Stock forwarding error variants
///
/// The display string of each variant is the boundary contract: whatever
/// a variant renders here is exactly what the caller receives as the
/// response body.
#[derive(Debug, Error)]
pub enum StockError {
    /// Mandatory query parameter absent or empty
    #[error("Parameter '{0}' has not been provided")]
    MissingParameter(&'static str),

    /// Inbound HTTP method the adapter does not serve
    #[error("Unsupported method \"{0}\"")]
    UnsupportedMethod(Method),

    /// Token fetch got no response within its deadline
    #[error("Server is unreachable")]
    Unreachable,

    /// Connection-level failure on either phase, surfaced verbatim
    #[error(transparent)]
    Transport(reqwest::Error),

    /// Backend answered the submit with a status other than 200
    #[error("Internal error")]
    Backend { status: u16 },

    /// Backend body did not parse as JSON
    #[error("Malformed backend response")]
    Decode(#[source] serde_json::Error),
}

impl StockError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::BAD_REQUEST)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StockError::MissingParameter(_) | StockError::UnsupportedMethod(_) => {
                ErrorKind::Validation
            }
            StockError::Unreachable => ErrorKind::Unreachable,
            StockError::Transport(_) => ErrorKind::Transport,
            StockError::Backend { .. } => ErrorKind::Backend,
            StockError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            StockError::MissingParameter(name) => {
                tracing::warn!(parameter = name, "Mandatory parameter missing");
            }
            StockError::UnsupportedMethod(method) => {
                tracing::warn!(method = %method, "Unsupported inbound method");
            }
            StockError::Unreachable => {
                tracing::error!("Backend did not respond within the token deadline");
            }
            StockError::Transport(e) => {
                tracing::error!(error = %e, "Backend connection failed");
            }
            StockError::Backend { status } => {
                tracing::error!(status = *status, "Backend rejected the submit");
            }
            StockError::Decode(e) => {
                tracing::error!(error = %e, "Backend response was not valid JSON");
            }
        }
    }
}

impl From<StockError> for AppError {
    fn from(err: StockError) -> Self {
        let message = err.to_string();
        match err {
            StockError::MissingParameter(_) | StockError::UnsupportedMethod(_) => {
                AppError::validation(message)
            }
            StockError::Unreachable => AppError::unreachable(message),
            StockError::Transport(e) => AppError::transport(message).with_source(e),
            StockError::Backend { .. } => AppError::backend(message),
            StockError::Decode(e) => AppError::decode(message).with_source(e),
        }
    }
}

impl IntoResponse for StockError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
