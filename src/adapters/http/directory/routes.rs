//! Axum router configuration for directory endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    list_institutions, list_professionals, list_rosters, register_institution,
    register_professional, remove_institution, remove_professional,
};
use crate::adapters::http::state::AppState;

/// # Routes (public)
///
/// - `GET /api/instituicoes` - List institutions
/// - `POST /api/instituicoes/cadastrar` - Register an institution
/// - `DELETE /api/instituicoes/:id` - Remove an institution
/// - `GET /api/profissionais` - List professionals
/// - `POST /api/profissionais/cadastrar` - Register a professional
/// - `DELETE /api/profissionais/:id` - Remove a professional
/// - `GET /api/instituicoes-com-profissionais` - Institutions with professionals
pub fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/api/instituicoes", get(list_institutions))
        .route("/api/instituicoes/cadastrar", post(register_institution))
        .route("/api/instituicoes/:id", delete(remove_institution))
        .route("/api/profissionais", get(list_professionals))
        .route("/api/profissionais/cadastrar", post(register_professional))
        .route("/api/profissionais/:id", delete(remove_professional))
        .route("/api/instituicoes-com-profissionais", get(list_rosters))
}
