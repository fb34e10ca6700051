//! Finsight Core - Domain entities, services, and portfolio aggregation.
//!
//! This crate contains the core business logic for the Finsight dashboard.
//! It is storage-agnostic and defines repository traits that are implemented
//! by the external record store layer.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod holdings;
pub mod portfolio;
pub mod profiles;
pub mod transactions;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

#[cfg(test)]
pub(crate) mod fixtures;
