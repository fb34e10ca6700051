//! Pure summary calculators over holding and goal snapshots.
//!
//! Stateless and free of I/O; every invocation recomputes from the snapshot
//! it is handed, so concurrent calls are safe by construction.

use rust_decimal::Decimal;

use crate::errors::{GoalError, Result};
use crate::goals::Goal;
use crate::holdings::Holding;

use super::summary_model::PortfolioTotals;

/// Computes portfolio totals from a holding snapshot.
///
/// An empty snapshot yields all-zero totals. A zero cost basis reports a
/// gain of 0%, never a division fault: an empty or all-cash portfolio is a
/// legitimate state that should read neutrally.
pub fn compute_totals(holdings: &[Holding]) -> PortfolioTotals {
    let total_value: Decimal = holdings.iter().map(Holding::market_value).sum();
    let total_cost: Decimal = holdings.iter().map(Holding::cost_basis).sum();
    let gain = total_value - total_cost;
    let gain_percent = if total_cost.is_zero() {
        Decimal::ZERO
    } else {
        gain / total_cost * Decimal::ONE_HUNDRED
    };

    PortfolioTotals {
        total_value,
        total_cost,
        gain,
        gain_percent,
    }
}

/// Computes a goal's progress as a percentage of its target amount.
///
/// The result is not clamped; over-funded goals report above 100%. A goal
/// must have a positive target by construction, so a zero or negative
/// target is a genuine input error rather than a legitimate empty state.
pub fn compute_goal_progress(goal: &Goal) -> Result<Decimal> {
    if goal.target_amount <= Decimal::ZERO {
        return Err(GoalError::InvalidTarget {
            name: goal.name.clone(),
            target_amount: goal.target_amount,
        }
        .into());
    }
    Ok(goal.current_amount / goal.target_amount * Decimal::ONE_HUNDRED)
}
