//! Portfolio summary - totals and goal progress calculators.

mod summary_calculator;
mod summary_model;

pub use summary_calculator::{compute_goal_progress, compute_totals};
pub use summary_model::PortfolioTotals;
