//! Dashboard overview service.

use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::constants::GOAL_NEAR_COMPLETION_PCT;
use crate::errors::Result;
use crate::goals::GoalServiceTrait;
use crate::holdings::HoldingServiceTrait;
use crate::portfolio::allocation::compute_allocations;
use crate::portfolio::summary::{compute_goal_progress, compute_totals};

use super::overview_model::DashboardOverview;
use super::overview_traits::OverviewServiceTrait;

/// Assembles the dashboard headline numbers from fresh goal and holding
/// snapshots. The calculators stay pure; this service is the one place in
/// the portfolio module that talks to repositories.
pub struct OverviewService {
    goal_service: Arc<dyn GoalServiceTrait>,
    holding_service: Arc<dyn HoldingServiceTrait>,
}

impl OverviewService {
    pub fn new(
        goal_service: Arc<dyn GoalServiceTrait>,
        holding_service: Arc<dyn HoldingServiceTrait>,
    ) -> Self {
        Self {
            goal_service,
            holding_service,
        }
    }
}

impl OverviewServiceTrait for OverviewService {
    fn get_overview(&self) -> Result<DashboardOverview> {
        let holdings = self.holding_service.get_holdings()?;
        let goals = self.goal_service.get_goals()?;

        let totals = compute_totals(&holdings);
        let allocations = compute_allocations(&holdings);

        let mut goals_near_completion = 0;
        for goal in &goals {
            if compute_goal_progress(goal)? >= GOAL_NEAR_COMPLETION_PCT {
                goals_near_completion += 1;
            }
        }

        let gainers_today = holdings
            .iter()
            .filter(|h| h.change_24h > Decimal::ZERO)
            .count();

        debug!(
            "Computed overview: {} holdings, {} goals",
            holdings.len(),
            goals.len()
        );

        Ok(DashboardOverview {
            totals,
            active_goals: goals.len(),
            goals_near_completion,
            holdings_count: holdings.len(),
            gainers_today,
            allocations,
        })
    }
}
