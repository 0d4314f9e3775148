//! Backend Credentials
//!
//! Username/password pair for the backend system and the Basic-Auth
//! header value derived from it.

use base64::{Engine, engine::general_purpose};
use std::fmt;

/// Credential pair for the backend system.
///
/// The pair is read at startup and never mutated afterwards. The
/// `Authorization` value is derived once via [`authorization_value`]
/// and shared read-only across requests; nothing recomputes it per call.
///
/// Debug output redacts the password.
///
/// [`authorization_value`]: BasicCredentials::authorization_value
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Derive the `Authorization` header value per RFC 7617.
    ///
    /// `"Basic " + base64(username ":" password)`.
    pub fn authorization_value(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password);
        format!("Basic {}", general_purpose::STANDARD.encode(pair))
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
