//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is what the session layer hands to request handlers.
//! It carries no provider-specific data, so the JWT adapter and test doubles
//! populate it the same way.

use super::UserId;
use thiserror::Error;

/// User resolved from a valid session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Errors raised while validating or issuing session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is malformed or carries an invalid signature.
    #[error("Invalid session token")]
    InvalidToken,

    /// The token was valid once but has expired.
    #[error("Session expired")]
    TokenExpired,

    /// Signing failed (misconfigured key).
    #[error("Could not issue session: {0}")]
    IssueFailed(String),
}

impl AuthError {
    /// Returns true if the client should log in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
