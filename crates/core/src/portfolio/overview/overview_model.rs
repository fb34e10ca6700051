use serde::{Deserialize, Serialize};

use crate::portfolio::allocation::AllocationSlice;
use crate::portfolio::summary::PortfolioTotals;

/// Headline numbers for the dashboard, recomputed from a fresh snapshot
/// on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub totals: PortfolioTotals,
    /// Number of goals currently tracked
    pub active_goals: usize,
    /// Goals whose progress has reached the near-completion threshold
    pub goals_near_completion: usize,
    /// Number of positions in the portfolio
    pub holdings_count: usize,
    /// Positions with a positive 24-hour change
    pub gainers_today: usize,
    pub allocations: Vec<AllocationSlice>,
}
