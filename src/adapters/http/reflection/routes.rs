//! Axum router configuration for reflection endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_action_plan, get_reflections, save_action_plan, save_reflections};
use crate::adapters::http::state::AppState;

/// # Routes (all require authentication)
///
/// - `GET/POST /api/reflexoes` - Read or replace reflections
/// - `GET/POST /api/plano-acao` - Read or store the action plan
pub fn reflection_routes() -> Router<AppState> {
    Router::new()
        .route("/api/reflexoes", get(get_reflections).post(save_reflections))
        .route("/api/plano-acao", get(get_action_plan).post(save_action_plan))
}
