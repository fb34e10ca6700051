//! Holdings module - position models and snapshot access.

mod holdings_model;
mod holdings_service;
mod holdings_traits;

pub use holdings_model::{Holding, HoldingType};
pub use holdings_service::HoldingService;
pub use holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
