//! HTTP Handlers

use crate::application::get_stock::GetStockUseCase;
use crate::domain::gateway::StockGateway;
use crate::error::{StockError, StockResult};
use crate::presentation::dto::StockParams;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::Method;
use serde_json::Value;
use std::sync::Arc;

/// Shared state for stock handlers
#[derive(Clone)]
pub struct StockAppState<G>
where
    G: StockGateway + Clone + Send + Sync + 'static,
{
    pub gateway: Arc<G>,
}

/// GET /api/stock
///
/// Forwards the lookup to the backend and relays the JSON result
/// verbatim. Every failure renders as the plain-message envelope.
pub async fn get_stock<G>(
    State(state): State<StockAppState<G>>,
    Query(params): Query<StockParams>,
) -> StockResult<Json<Value>>
where
    G: StockGateway + Clone + Send + Sync + 'static,
{
    let use_case = GetStockUseCase::new(state.gateway.clone());

    let result = use_case.execute(params.into()).await?;

    Ok(Json(result))
}

/// Catch-all for verbs other than GET on the stock route.
pub async fn unsupported_method(method: Method) -> StockResult<Json<Value>> {
    Err(StockError::UnsupportedMethod(method))
}
