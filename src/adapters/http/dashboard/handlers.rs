//! HTTP handlers for the per-user dashboard and the population overview.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::adapters::http::state::AppState;
use crate::application::handlers::dashboard::GetDashboardQuery;
use crate::domain::foundation::Timestamp;

use super::dto::{DashboardResponse, PopulationResponse};

/// GET /api/dashboard-data - Dashboard for the caller
pub async fn dashboard_data(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetDashboardQuery {
        user_id: user.id,
        now: Timestamp::now(),
    };
    let dashboard = state.dashboard_handler().handle(query).await?;
    Ok(Json(DashboardResponse::from(dashboard)))
}

/// GET /api/avaliacao-geral/dados - Statistics across every user
pub async fn population_overview(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> Result<impl IntoResponse, ApiError> {
    let current_user = user.map(|u| u.id);
    let overview = state.population_handler().handle(current_user).await?;
    Ok(Json(PopulationResponse::new(overview, current_user)))
}
