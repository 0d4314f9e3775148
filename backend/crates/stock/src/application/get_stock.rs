//! Get Stock Use Case

use crate::domain::gateway::StockGateway;
use crate::domain::value_objects::StockQuery;
use crate::error::StockResult;
use serde_json::Value;
use std::sync::Arc;

/// Backend resource owning the stock positions
pub const STOCK_RESOURCE: &str = "/sap/bc/rest/zaws/stock";

/// Input DTO for get stock
///
/// Raw parameter values as the inbound adapter collected them; absent
/// parameters arrive as empty strings. Validation happens here, not in
/// the adapter.
#[derive(Debug, Clone, Default)]
pub struct GetStockInput {
    pub plant: String,
    pub storage: String,
    pub material: String,
}

/// Get Stock Use Case
pub struct GetStockUseCase<G: StockGateway> {
    gateway: Arc<G>,
}

impl<G: StockGateway> GetStockUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Validate the parameters and forward the lookup.
    ///
    /// A validation failure returns before the gateway is touched; no
    /// network call happens for a rejected query.
    pub async fn execute(&self, input: GetStockInput) -> StockResult<Value> {
        let query = StockQuery::new(input.plant, input.storage, input.material)?;

        tracing::info!(
            plant = %query.plant(),
            storage = %query.storage(),
            material = %query.material(),
            "Forwarding stock lookup"
        );

        let result = self.gateway.send(STOCK_RESOURCE, &query).await?;

        tracing::info!(plant = %query.plant(), "Stock lookup succeeded");

        Ok(result)
    }
}
