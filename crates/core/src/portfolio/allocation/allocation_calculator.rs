//! Allocation breakdown calculator.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::holdings::{Holding, HoldingType};

use super::allocation_model::AllocationSlice;

/// Aggregates a holding snapshot into per-category allocation slices,
/// sorted by value descending.
///
/// A portfolio with zero total market value has no meaningful breakdown
/// and yields an empty vec.
pub fn compute_allocations(holdings: &[Holding]) -> Vec<AllocationSlice> {
    let total: Decimal = holdings.iter().map(Holding::market_value).sum();
    if total.is_zero() {
        return Vec::new();
    }

    let mut by_type: HashMap<HoldingType, Decimal> = HashMap::new();
    for holding in holdings {
        *by_type.entry(holding.holding_type).or_insert(Decimal::ZERO) +=
            holding.market_value();
    }

    let mut slices: Vec<AllocationSlice> = by_type
        .into_iter()
        .map(|(holding_type, value)| AllocationSlice {
            holding_type,
            name: holding_type.label().to_string(),
            value,
            percentage: value / total * Decimal::ONE_HUNDRED,
        })
        .collect();

    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}
