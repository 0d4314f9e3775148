//! Stock Routes

use crate::domain::gateway::StockGateway;
use crate::infra::sap::SapGateway;
use crate::presentation::handlers::{self, StockAppState};
use axum::Router;
use axum::routing::{MethodFilter, on};
use std::sync::Arc;

/// Create the stock router backed by the real two-phase gateway.
pub fn stock_router(gateway: SapGateway) -> Router {
    stock_router_generic(gateway)
}

/// Create a generic stock router for any gateway implementation.
///
/// The route matches GET strictly: every other verb, HEAD included,
/// lands in the unsupported-method fallback.
pub fn stock_router_generic<G>(gateway: G) -> Router
where
    G: StockGateway + Clone + Send + Sync + 'static,
{
    let state = StockAppState {
        gateway: Arc::new(gateway),
    };

    Router::new()
        .route(
            "/stock",
            on(MethodFilter::GET, handlers::get_stock::<G>)
                .fallback(handlers::unsupported_method),
        )
        .with_state(state)
}
