//! SAP-Style Two-Phase Gateway
//!
//! The backend refuses bare POSTs. Every submit is a strictly sequential
//! pair of calls on the same resource path:
//!
//! 1. GET with `x-csrf-token: fetch` to mint an anti-forgery token and a
//!    session cookie
//! 2. POST echoing the token and cookie, carrying the JSON payload
//!
//! The token/cookie pair lives for exactly one exchange and is never
//! reused across inbound requests.

use crate::application::config::GatewayConfig;
use crate::domain::gateway::StockGateway;
use crate::domain::value_objects::StockQuery;
use crate::error::{StockError, StockResult};
use platform::cookie::join_set_cookie_values;
use reqwest::StatusCode;
use reqwest::header;
use serde_json::Value;

/// Anti-forgery token header name
pub const CSRF_TOKEN_HEADER: &str = "x-csrf-token";
/// Sentinel value asking the backend to mint a fresh token
pub const CSRF_FETCH: &str = "fetch";
/// Marker the backend expects on AJAX-style requests
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";

/// Headers captured from the token-fetch response.
///
/// Produced by one [`SapGateway::fetch_token`] call and consumed by
/// value by exactly one [`SapGateway::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenContext {
    /// Anti-forgery token to echo as `X-CSRF-Token`
    pub csrf_token: String,
    /// Session cookie(s) to echo as `Cookie`, already joined
    pub cookie: String,
}

/// HTTP gateway speaking the backend's two-phase protocol.
///
/// Holds the derived Authorization value and a shared client; both are
/// immutable after construction and safe to share across concurrent
/// requests. Neither phase is ever retried.
#[derive(Debug, Clone)]
pub struct SapGateway {
    config: GatewayConfig,
    /// Derived once from the credential pair, never recomputed
    authorization: String,
    client: reqwest::Client,
}

impl SapGateway {
    pub fn new(config: GatewayConfig) -> Self {
        let authorization = config.credentials.authorization_value();
        Self {
            config,
            authorization,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Phase 1: fetch an anti-forgery token for `path`.
    ///
    /// Any response status counts as success; the interesting part is
    /// the headers. A token or cookie the backend did not send degrades
    /// to an empty string and surfaces later as a rejected POST. No
    /// response within the configured deadline fails with
    /// [`StockError::Unreachable`].
    pub async fn fetch_token(&self, path: &str) -> StockResult<TokenContext> {
        let response = self
            .client
            .get(self.url(path))
            .header(header::AUTHORIZATION, &self.authorization)
            .header(CSRF_TOKEN_HEADER, CSRF_FETCH)
            .timeout(self.config.token_timeout)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    StockError::Unreachable
                } else {
                    StockError::Transport(err)
                }
            })?;

        let csrf_token = response
            .headers()
            .get(CSRF_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let cookie = join_set_cookie_values(response.headers());

        tracing::debug!(
            status = %response.status(),
            token_present = !csrf_token.is_empty(),
            cookie_present = !cookie.is_empty(),
            "Token fetch completed"
        );

        Ok(TokenContext { csrf_token, cookie })
    }

    /// Phase 2: POST `payload` to `path`, echoing token and cookie.
    ///
    /// The backend must answer exactly 200; anything else fails with
    /// [`StockError::Backend`] and the body is discarded unread. On 200
    /// the body is drained to completion and parsed as JSON. This phase
    /// deliberately carries no deadline.
    pub async fn submit<T>(&self, path: &str, token: TokenContext, payload: &T) -> StockResult<Value>
    where
        T: serde::Serialize + Sync + ?Sized,
    {
        let response = self
            .client
            .post(self.url(path))
            .header(header::AUTHORIZATION, &self.authorization)
            .header(header::ACCEPT_LANGUAGE, "en")
            .header(REQUESTED_WITH_HEADER, "XMLHttpRequest")
            .header(CSRF_TOKEN_HEADER, &token.csrf_token)
            .header(header::COOKIE, &token.cookie)
            .json(payload)
            .send()
            .await
            .map_err(StockError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(status = %status, "Submit refused");
            return Err(StockError::Backend {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(StockError::Transport)?;
        serde_json::from_str(&body).map_err(StockError::Decode)
    }
}

impl StockGateway for SapGateway {
    /// Chain both phases; the first failure short-circuits.
    async fn send(&self, path: &str, query: &StockQuery) -> StockResult<Value> {
        let token = self.fetch_token(path).await?;
        self.submit(path, token, query).await
    }
}
