//! Application Configuration
//!
//! Connection settings for the stock backend.

use platform::credentials::BasicCredentials;
use std::time::Duration;

/// Stock gateway configuration
///
/// Built once at startup and shared read-only; nothing here changes
/// after construction.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend host, without scheme
    pub host: String,
    /// Backend TCP port
    pub port: u16,
    /// Credential pair; the Authorization value is derived from it once
    pub credentials: BasicCredentials,
    /// Deadline for the token-fetch phase. The submit phase carries
    /// none; backend behavior under a hanging POST is unspecified, so
    /// no cutoff is invented there.
    pub token_timeout: Duration,
}

impl GatewayConfig {
    pub const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create config for development (local backend, test credentials)
    pub fn development() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8000,
            credentials: BasicCredentials::new("developer", "developer"),
            token_timeout: Self::DEFAULT_TOKEN_TIMEOUT,
        }
    }

    /// Base URL of the backend, scheme included
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::development()
    }
}
