//! Domain Value Objects

use crate::error::{StockError, StockResult};
use serde::Serialize;

/// Stock lookup forwarded to the backend.
///
/// `plant` is mandatory and non-empty; `storage` and `material` default
/// to empty strings, which the backend reads as "no filter". Immutable
/// once constructed. Serializes to the exact POST payload,
/// `{"plant":..,"storage":..,"material":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockQuery {
    plant: String,
    storage: String,
    material: String,
}

impl StockQuery {
    /// Build a query, enforcing the mandatory `plant` parameter.
    pub fn new(
        plant: impl Into<String>,
        storage: impl Into<String>,
        material: impl Into<String>,
    ) -> StockResult<Self> {
        let plant = plant.into();
        if plant.is_empty() {
            return Err(StockError::MissingParameter("plant"));
        }

        Ok(Self {
            plant,
            storage: storage.into(),
            material: material.into(),
        })
    }

    pub fn plant(&self) -> &str {
        &self.plant
    }

    pub fn storage(&self) -> &str {
        &self.storage
    }

    pub fn material(&self) -> &str {
        &self.material
    }
}
