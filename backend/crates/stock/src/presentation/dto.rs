//! Data Transfer Objects

use crate::application::get_stock::GetStockInput;
use serde::Deserialize;

/// Query string of `GET /stock`.
///
/// Every field is optional at the HTTP layer; a missing field arrives
/// as an empty string so that deserialization itself can never reject
/// a request. Whether `plant` is acceptable is decided by the use case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StockParams {
    pub plant: String,
    pub storage: String,
    pub material: String,
}

impl From<StockParams> for GetStockInput {
    fn from(params: StockParams) -> Self {
        Self {
            plant: params.plant,
            storage: params.storage,
            material: params.material,
        }
    }
}
