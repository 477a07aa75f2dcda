//! Axum router configuration for dashboard endpoints.

use axum::{routing::get, Router};

use super::handlers::{dashboard_data, population_overview};
use crate::adapters::http::state::AppState;

/// # Routes
///
/// - `GET /api/dashboard-data` - Caller's dashboard (auth)
/// - `GET /api/avaliacao-geral/dados` - General evaluation (public)
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard-data", get(dashboard_data))
        .route("/api/avaliacao-geral/dados", get(population_overview))
}
