//! HTTP handlers for reflections and the action plan.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::dto::MessageResponse;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::reflection::{SaveActionPlanCommand, SaveReflectionsCommand};

use super::dto::{
    ActionPlanResponse, ReflectionView, ReflectionsResponse, SaveActionPlanRequest,
    SaveReflectionsRequest,
};

/// GET /api/reflexoes - Caller's reflections keyed by prompt
pub async fn get_reflections(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let reflections = state.get_reflections_handler().handle(user.id).await?;
    let reflexoes = reflections
        .into_iter()
        .map(|(prompt, reflection)| (prompt, ReflectionView::from(reflection)))
        .collect();
    Ok(Json(ReflectionsResponse {
        success: true,
        reflexoes,
    }))
}

/// POST /api/reflexoes - Replace the caller's reflections
pub async fn save_reflections(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<SaveReflectionsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SaveReflectionsCommand {
        user_id: user.id,
        entries: request.into_entries(),
    };
    state.save_reflections_handler().handle(cmd).await?;
    Ok(Json(MessageResponse::new("Reflexões salvas com sucesso!")))
}

/// GET /api/plano-acao - Stored action plan, `{}` when none
pub async fn get_action_plan(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let plano_acao = state.get_action_plan_handler().handle(user.id).await?;
    Ok(Json(ActionPlanResponse {
        success: true,
        plano_acao,
    }))
}

/// POST /api/plano-acao - Store the caller's action plan
pub async fn save_action_plan(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<SaveActionPlanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SaveActionPlanCommand {
        user_id: user.id,
        plan: request.plano_acao,
    };
    state.save_action_plan_handler().handle(cmd).await?;
    Ok(Json(MessageResponse::new("Plano de ação salvo com sucesso!")))
}
