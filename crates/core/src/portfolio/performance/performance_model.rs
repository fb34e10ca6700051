use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A portfolio value observed for one period, e.g. a month-end net worth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuePoint {
    /// Period label, e.g. "Jul".
    pub period: String,
    pub value: Decimal,
}

/// Percentage change of one period relative to the previous one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReturn {
    pub period: String,
    pub return_pct: Decimal,
}
