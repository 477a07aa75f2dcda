//! HTTP handlers for the questionnaire, diagnoses, recommendations and tips.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::adapters::http::state::AppState;
use crate::application::handlers::assessment::{GetTipOfTheDayQuery, SubmitDiagnosisCommand};
use crate::domain::foundation::{Timestamp, UserId};

use super::dto::{
    QuestionView, RecommendationsResponse, SubmitDiagnosisRequest, SubmitDiagnosisResponse,
    TipResponse,
};

/// GET /api/perguntas - The questionnaire, ordered by id
pub async fn list_questions(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let questions = state.list_questions_handler().handle().await?;
    let body: Vec<QuestionView> = questions.into_iter().map(QuestionView::from).collect();
    Ok(Json(body))
}

/// POST /api/diagnostico - Score and store the caller's answers
pub async fn submit_diagnosis(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<SubmitDiagnosisRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SubmitDiagnosisCommand {
        actor: user.id,
        member: None,
        answers: request.respostas,
    };
    let result = state.submit_diagnosis_handler().handle(cmd).await?;
    Ok(Json(SubmitDiagnosisResponse::from(result)))
}

/// POST /api/familia/membros/:id/diagnostico - Record a diagnosis for a family member
pub async fn submit_member_diagnosis(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(member_id): Path<i64>,
    Json(request): Json<SubmitDiagnosisRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SubmitDiagnosisCommand {
        actor: user.id,
        member: Some(UserId::new(member_id)?),
        answers: request.respostas,
    };
    let result = state.submit_diagnosis_handler().handle(cmd).await?;
    Ok(Json(SubmitDiagnosisResponse::from(result)))
}

/// GET /api/solucoes/:nivel - Recommendations for a level label
pub async fn recommendations(
    State(state): State<AppState>,
    Path(nivel): Path<String>,
) -> impl IntoResponse {
    let solucoes = state.recommendations_handler().handle(&nivel);
    Json(RecommendationsResponse {
        success: true,
        nivel,
        solucoes,
    })
}

/// GET /api/dica-do-dia - Tip of the day for the caller's latest level
pub async fn tip_of_the_day(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> impl IntoResponse {
    let query = GetTipOfTheDayQuery {
        user_id: user.map(|u| u.id),
        now: Timestamp::now(),
    };
    let dica = state.tip_of_the_day_handler().handle(query).await;
    Json(TipResponse { dica })
}
