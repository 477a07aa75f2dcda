//! Axum router configuration for account endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{check_auth, login, logout, register};
use crate::adapters::http::state::AppState;

/// # Routes
///
/// - `POST /api/cadastrar` - Register and start a session
/// - `POST /api/login` - Log in
/// - `GET /api/check-auth` - Session identity
/// - `GET /logout` - End the session
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/api/cadastrar", post(register))
        .route("/api/login", post(login))
        .route("/api/check-auth", get(check_auth))
        .route("/logout", get(logout))
}
