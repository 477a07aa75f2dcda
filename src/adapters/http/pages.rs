//! HTML pages served from the templates directory.
//!
//! Pages are static HTML; the data comes from the JSON endpoints. `/` and
//! `/instituicoes` need a session and send anonymous visitors to `/landing`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{routing::get, Router};

use super::middleware::OptionalAuth;
use super::state::AppState;

const LANDING_PATH: &str = "/landing";

/// Reads a template file and serves it as HTML.
async fn render(state: &AppState, template: &str) -> Response {
    let path = state.settings.templates_dir.join(template);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "template unavailable");
            (StatusCode::NOT_FOUND, Html("<h1>Página não encontrada</h1>")).into_response()
        }
    }
}

async fn render_for_member(state: &AppState, auth: OptionalAuth, template: &str) -> Response {
    match auth.0 {
        Some(_) => render(state, template).await,
        None => Redirect::to(LANDING_PATH).into_response(),
    }
}

/// GET / - Main questionnaire and dashboard page
pub async fn index(State(state): State<AppState>, auth: OptionalAuth) -> Response {
    render_for_member(&state, auth, "index.html").await
}

/// GET /instituicoes - Directory page
pub async fn institutions(State(state): State<AppState>, auth: OptionalAuth) -> Response {
    render_for_member(&state, auth, "instituicoes.html").await
}

pub async fn landing(State(state): State<AppState>) -> Response {
    render(&state, "landing.html").await
}

pub async fn general_evaluation(State(state): State<AppState>) -> Response {
    render(&state, "avaliacao-geral.html").await
}

pub async fn register_institution(State(state): State<AppState>) -> Response {
    render(&state, "cadastrar_instituicao.html").await
}

pub async fn register_professional(State(state): State<AppState>) -> Response {
    render(&state, "cadastrar_profissional.html").await
}

pub async fn institution_list(State(state): State<AppState>) -> Response {
    render(&state, "lista_instituicoes.html").await
}

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/instituicoes", get(institutions))
        .route(LANDING_PATH, get(landing))
        .route("/avaliacao-geral", get(general_evaluation))
        .route("/cadastrar-instituicao", get(register_institution))
        .route("/cadastrar-profissional", get(register_professional))
        .route("/lista-instituicoes", get(institution_list))
}
