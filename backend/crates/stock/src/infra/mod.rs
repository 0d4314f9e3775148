//! Infrastructure Layer
//!
//! HTTP implementation of the gateway trait.

pub mod sap;
