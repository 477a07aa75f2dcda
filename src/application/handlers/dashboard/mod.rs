//! Dashboard and overview query handlers.

mod get_dashboard;
mod get_population_overview;

pub use get_dashboard::{GetDashboardHandler, GetDashboardQuery};
pub use get_population_overview::GetPopulationOverviewHandler;
