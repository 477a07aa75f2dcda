//! HTTP middleware (authentication).

pub mod auth;

pub use auth::{
    auth_middleware, removal_cookie, session_cookie, AuthRejection, AuthState, OptionalAuth,
    RequireAuth, SESSION_COOKIE,
};
