use crate::errors::Result;
use crate::transactions::transactions_model::Transaction;

/// Trait for transaction repository operations
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Loads all transactions for the authenticated owner, newest first.
    fn load_transactions(&self) -> Result<Vec<Transaction>>;
}

/// Trait for transaction service operations
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
    fn get_transactions_for_symbol(&self, symbol: &str) -> Result<Vec<Transaction>>;
}
