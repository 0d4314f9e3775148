//! Stock Forwarding Module
//!
//! Clean Architecture structure:
//! - `domain/` - Query value object and the backend gateway trait
//! - `application/` - Use case and gateway configuration
//! - `infra/` - Two-phase HTTP gateway implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Protocol Model
//! - The backend rejects bare POSTs: a GET must first fetch an
//!   anti-forgery token and a session cookie, and the POST must echo both
//! - Token and cookie live exactly as long as one inbound request
//! - Every failure surfaces at the boundary as a plain message over
//!   HTTP 400

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GatewayConfig;
pub use error::{StockError, StockResult};
pub use infra::sap::SapGateway;
pub use presentation::router::stock_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
