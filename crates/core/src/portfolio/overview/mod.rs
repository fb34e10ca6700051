//! Dashboard overview module.

mod overview_model;
mod overview_service;
mod overview_traits;

pub use overview_model::DashboardOverview;
pub use overview_service::OverviewService;
pub use overview_traits::OverviewServiceTrait;
