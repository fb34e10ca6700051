use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-wide totals derived from a holding snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    /// Sum of units x current price over all holdings.
    pub total_value: Decimal,
    /// Sum of units x average acquisition price over all holdings.
    pub total_cost: Decimal,
    /// Unrealized gain: total value minus total cost.
    pub gain: Decimal,
    /// Gain as a percentage of cost basis; 0 when the cost basis is 0.
    pub gain_percent: Decimal,
}

impl PortfolioTotals {
    pub fn zero() -> Self {
        Self {
            total_value: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            gain: Decimal::ZERO,
            gain_percent: Decimal::ZERO,
        }
    }
}
