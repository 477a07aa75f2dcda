//! Dashboard - the per-user landing view.

mod composition;
mod errors;

pub use composition::{compose_dashboard, Dashboard, DashboardInputs};
pub use errors::DashboardError;
