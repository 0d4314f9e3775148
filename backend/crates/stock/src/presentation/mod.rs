//! Presentation Layer
//!
//! HTTP handlers, request DTOs and routing (axum)

pub mod dto;
pub mod handlers;
pub mod router;
