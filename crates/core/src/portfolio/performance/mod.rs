//! Portfolio performance - period-over-period returns.

mod performance_calculator;
mod performance_model;

pub use performance_calculator::compute_monthly_returns;
pub use performance_model::{MonthlyReturn, ValuePoint};
