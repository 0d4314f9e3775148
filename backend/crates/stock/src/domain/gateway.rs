//! Gateway Trait
//!
//! Interface to the backend system. Implementation is in the
//! infrastructure layer.

use crate::domain::value_objects::StockQuery;
use crate::error::StockResult;
use serde_json::Value;

/// Outbound gateway trait
///
/// One call covers the whole exchange with the backend: token fetch,
/// then the token-carrying POST. Exactly one of {value, error} comes
/// back per call. Implementations must not retry either phase.
#[trait_variant::make(StockGateway: Send)]
pub trait LocalStockGateway {
    /// Send `query` to the backend resource at `path`
    async fn send(&self, path: &str, query: &StockQuery) -> StockResult<Value>;
}
