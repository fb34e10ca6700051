//! Transactions module - recorded portfolio events.

mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use transactions_model::{Transaction, TransactionType};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};

#[cfg(test)]
mod transactions_service_tests;
