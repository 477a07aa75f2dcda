//! Axum router configuration for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    list_questions, recommendations, submit_diagnosis, submit_member_diagnosis, tip_of_the_day,
};
use crate::adapters::http::state::AppState;

/// # Routes
///
/// - `GET /api/perguntas` - Questionnaire
/// - `POST /api/diagnostico` - Diagnose the caller (auth)
/// - `POST /api/familia/membros/:id/diagnostico` - Diagnose a family member (auth)
/// - `GET /api/solucoes/:nivel` - Recommendations for a level
/// - `GET /api/dica-do-dia` - Tip of the day
pub fn assessment_routes() -> Router<AppState> {
    Router::new()
        .route("/api/perguntas", get(list_questions))
        .route("/api/diagnostico", post(submit_diagnosis))
        .route(
            "/api/familia/membros/:id/diagnostico",
            post(submit_member_diagnosis),
        )
        .route("/api/solucoes/:nivel", get(recommendations))
        .route("/api/dica-do-dia", get(tip_of_the_day))
}
