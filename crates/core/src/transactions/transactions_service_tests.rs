//! Unit tests for the transaction service.

use serde_json::json;
use std::sync::Arc;

use crate::errors::Result;
use crate::fixtures;
use crate::transactions::{
    Transaction, TransactionRepositoryTrait, TransactionService, TransactionServiceTrait,
    TransactionType,
};

struct MockTransactionRepository {
    transactions: Vec<Transaction>,
}

impl TransactionRepositoryTrait for MockTransactionRepository {
    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }
}

fn service() -> TransactionService {
    TransactionService::new(Arc::new(MockTransactionRepository {
        transactions: fixtures::sample_transactions(),
    }))
}

#[test]
fn lists_all_transactions_in_store_order() {
    let transactions = service().get_transactions().unwrap();
    assert_eq!(transactions.len(), 7);
    assert_eq!(transactions[0].symbol, "AAPL");
}

#[test]
fn filters_by_symbol_preserving_order() {
    let transactions = service().get_transactions_for_symbol("AAPL").unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].transaction_type, TransactionType::Buy);
    assert_eq!(transactions[1].transaction_type, TransactionType::Sell);
}

#[test]
fn unknown_symbol_yields_empty() {
    assert!(service().get_transactions_for_symbol("TSLA").unwrap().is_empty());
}

#[test]
fn dividend_units_are_absent_on_the_wire() {
    let dividend = fixtures::sample_transactions()
        .into_iter()
        .find(|t| t.transaction_type == TransactionType::Dividend)
        .unwrap();

    let value = serde_json::to_value(&dividend).unwrap();
    assert_eq!(value["transactionType"], json!("dividend"));
    assert_eq!(value["units"], serde_json::Value::Null);
    assert_eq!(value["symbol"], json!("MSFT"));
}
