//! HTTP handlers for sign-up, login and session checks.

use axum::extract::{Json, State};
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{removal_cookie, session_cookie, OptionalAuth};
use crate::adapters::http::state::AppState;
use crate::domain::account::User;

use super::dto::{
    CheckAuthResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    SessionUserView,
};

/// Signs a session for `user` and adds it to the jar.
fn start_session(state: &AppState, jar: CookieJar, user: &User) -> Result<CookieJar, ApiError> {
    let token = state.sessions.issuer.issue(&user.to_authenticated())?;
    Ok(jar.add(session_cookie(token, state.settings.secure_cookie)))
}

/// POST /api/cadastrar - Create an account with its family, then log in
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.register_handler().handle(request.into()).await?;
    let jar = start_session(&state, jar, &result.user)?;

    let response = RegisterResponse {
        success: true,
        message: "Cadastro realizado com sucesso!".to_string(),
        usuario_id: result.user.id,
    };
    Ok((jar, Json(response)))
}

/// POST /api/login - Verify credentials and start a session
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.login_handler().handle(request.into()).await?;
    let jar = start_session(&state, jar, &user)?;

    let response = LoginResponse {
        success: true,
        message: "Login realizado com sucesso!".to_string(),
        usuario: SessionUserView::from(user.to_authenticated()),
    };
    Ok((jar, Json(response)))
}

/// GET /api/check-auth - Report the session identity, if any
pub async fn check_auth(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    Json(CheckAuthResponse {
        authenticated: user.is_some(),
        usuario: user.map(SessionUserView::from),
    })
}

/// GET /logout - Drop the session cookie and go back to the landing page
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(removal_cookie()), Redirect::to("/landing"))
}
