//! Period-over-period return calculator.

use rust_decimal::Decimal;

use super::performance_model::{MonthlyReturn, ValuePoint};

/// Computes percentage changes between consecutive history entries.
///
/// The input is trusted to be in chronological order and is never sorted
/// here. The first entry has no baseline and reports 0; a zero prior value
/// also reports 0 for that step, the same neutral policy the totals apply
/// to a zero cost basis. Exact arithmetic, no rounding.
pub fn compute_monthly_returns(history: &[ValuePoint]) -> Vec<MonthlyReturn> {
    let mut returns = Vec::with_capacity(history.len());
    let mut previous: Option<&ValuePoint> = None;

    for point in history {
        let return_pct = match previous {
            Some(prev) if !prev.value.is_zero() => {
                (point.value - prev.value) / prev.value * Decimal::ONE_HUNDRED
            }
            _ => Decimal::ZERO,
        };
        returns.push(MonthlyReturn {
            period: point.period.clone(),
            return_pct,
        });
        previous = Some(point);
    }

    returns
}
