//! Domain Layer - Query model and gateway contract
//!
//! This layer contains:
//! - The stock query value object (validated at construction)
//! - The gateway trait the orchestration is written against

pub mod gateway;
pub mod value_objects;
