//! HTTP handlers for institutions and professionals.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::dto::MessageResponse;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::{InstitutionId, ProfessionalId};

use super::dto::{
    InstitutionCreatedResponse, InstitutionView, InstitutionsResponse, ProfessionalCreatedResponse,
    ProfessionalView, ProfessionalsResponse, RegisterInstitutionRequest,
    RegisterProfessionalRequest, RosterView,
};

// ════════════════════════════════════════════════════════════════════════════════
// Institutions
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/instituicoes - Institutions by name
pub async fn list_institutions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let institutions = state.list_institutions_handler().handle().await?;
    Ok(Json(InstitutionsResponse {
        success: true,
        instituicoes: institutions
            .into_iter()
            .map(InstitutionView::from)
            .collect(),
    }))
}

/// POST /api/instituicoes/cadastrar - Register an institution
pub async fn register_institution(
    State(state): State<AppState>,
    Json(request): Json<RegisterInstitutionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let institution = state
        .register_institution_handler()
        .handle(request.into())
        .await?;
    Ok(Json(InstitutionCreatedResponse {
        success: true,
        message: "Instituição cadastrada com sucesso!".to_string(),
        instituicao_id: institution.id,
    }))
}

/// DELETE /api/instituicoes/:id - Remove an institution; its professionals stay
pub async fn remove_institution(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let id = InstitutionId::new(id)?;
    state.remove_institution_handler().handle(id).await?;
    Ok(Json(MessageResponse::new("Instituição excluída com sucesso!")))
}

/// GET /api/instituicoes-com-profissionais - Institutions with their professionals
pub async fn list_rosters(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rosters = state.rosters_handler().handle().await?;
    Ok(Json(InstitutionsResponse {
        success: true,
        instituicoes: rosters.into_iter().map(RosterView::from).collect(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Professionals
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/profissionais - Professionals by name
pub async fn list_professionals(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let professionals = state.list_professionals_handler().handle().await?;
    Ok(Json(ProfessionalsResponse {
        success: true,
        profissionais: professionals
            .into_iter()
            .map(ProfessionalView::from)
            .collect(),
    }))
}

/// POST /api/profissionais/cadastrar - Register a professional
pub async fn register_professional(
    State(state): State<AppState>,
    Json(request): Json<RegisterProfessionalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let professional = state
        .register_professional_handler()
        .handle(request.into())
        .await?;
    Ok(Json(ProfessionalCreatedResponse {
        success: true,
        message: "Profissional cadastrado com sucesso!".to_string(),
        profissional_id: professional.id,
    }))
}

/// DELETE /api/profissionais/:id - Remove a professional
pub async fn remove_professional(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ProfessionalId::new(id)?;
    state.remove_professional_handler().handle(id).await?;
    Ok(Json(MessageResponse::new("Profissional excluído com sucesso!")))
}
