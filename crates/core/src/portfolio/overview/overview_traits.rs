use crate::errors::Result;

use super::overview_model::DashboardOverview;

/// Trait for dashboard overview computation
pub trait OverviewServiceTrait: Send + Sync {
    fn get_overview(&self) -> Result<DashboardOverview>;
}
