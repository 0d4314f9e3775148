//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Basic-Auth credential handling (derive once, share read-only)
//! - Cookie handling for backend session propagation

pub mod cookie;
pub mod credentials;
