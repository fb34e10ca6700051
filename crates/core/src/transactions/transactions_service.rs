//! Transaction history service.

use std::sync::Arc;

use crate::errors::Result;
use crate::transactions::transactions_model::Transaction;
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};

/// Service for reading the transaction history
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.transaction_repository.load_transactions()
    }

    fn get_transactions_for_symbol(&self, symbol: &str) -> Result<Vec<Transaction>> {
        let transactions = self.transaction_repository.load_transactions()?;
        Ok(transactions
            .into_iter()
            .filter(|t| t.symbol == symbol)
            .collect())
    }
}
