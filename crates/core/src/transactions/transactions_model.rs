//! Transactions domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of a recorded transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
    Contribution,
    Withdrawal,
}

/// A recorded portfolio event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub symbol: String,
    pub transaction_type: TransactionType,
    /// Absent or zero for non-unit events such as dividends.
    pub units: Option<Decimal>,
    /// Price per unit at the time of the transaction.
    pub price: Decimal,
    pub date: NaiveDate,
}
