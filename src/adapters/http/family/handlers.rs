//! HTTP handlers for the family panorama and member management.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::dto::MessageResponse;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::family::{AddFamilyMemberCommand, RemoveFamilyMemberCommand};
use crate::domain::foundation::UserId;

use super::dto::{AddMemberRequest, AddMemberResponse, FamilyResponse, FamilySummaryView};

/// GET /api/familia - Family panorama for the caller
pub async fn get_family(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.get_family_handler().handle(user.id).await?;
    Ok(Json(FamilyResponse {
        success: true,
        familia: FamilySummaryView::from(summary),
    }))
}

/// POST /api/familia/membros - Add a member to the caller's family
pub async fn add_member(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<AddMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = AddFamilyMemberCommand {
        actor: user.id,
        name: request.nome,
        age: request.idade,
        relationship: request.relacionamento,
    };
    let member = state.add_member_handler().handle(cmd).await?;

    Ok(Json(AddMemberResponse {
        success: true,
        message: format!("Membro {} adicionado com sucesso!", member.name),
        membro_id: member.id,
    }))
}

/// DELETE /api/familia/membros/:id - Remove a member with their history
pub async fn remove_member(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(member_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RemoveFamilyMemberCommand {
        actor: user.id,
        member: UserId::new(member_id)?,
    };
    let removed = state.remove_member_handler().handle(cmd).await?;
    Ok(Json(MessageResponse::new(format!(
        "Membro {} excluído com sucesso!",
        removed.name
    ))))
}
