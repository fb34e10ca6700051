use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::HoldingType;

/// Allocation of one holding category within the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub holding_type: HoldingType,
    /// Display name of the category
    pub name: String,
    /// Total market value in this category
    pub value: Decimal,
    /// Percentage of total portfolio value (0-100)
    pub percentage: Decimal,
}
