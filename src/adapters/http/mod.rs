//! HTTP adapters - REST API and pages.
//!
//! Each area has its own `dto`, `handlers` and `routes`. `app_router`
//! merges them under one `AppState` with the session middleware in front.
//! JSON keys stay in Portuguese because the pages read them as-is.

pub mod account;
pub mod assessment;
pub mod dashboard;
pub mod directory;
pub mod dto;
pub mod error;
pub mod family;
pub mod middleware;
pub mod pages;
pub mod reflection;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::{AppState, HttpSettings, Sessions, Stores};

use axum::Router;

/// Builds the full application router.
///
/// Transport layers (tracing, timeouts, CORS) are added by the binary.
pub fn app_router(state: AppState) -> Router {
    let validator = state.sessions.validator.clone();

    Router::new()
        .merge(pages::page_routes())
        .merge(account::account_routes())
        .merge(assessment::assessment_routes())
        .merge(dashboard::dashboard_routes())
        .merge(family::family_routes())
        .merge(reflection::reflection_routes())
        .merge(directory::directory_routes())
        .layer(axum::middleware::from_fn_with_state(
            validator,
            middleware::auth_middleware,
        ))
        .with_state(state)
}
