//! Session token ports.
//!
//! `SessionValidator` turns a raw token (cookie value or Bearer token) into
//! an `AuthenticatedUser`. `SessionIssuer` mints the token after a
//! successful registration or login.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates session tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Return `AuthError::InvalidToken` for malformed or badly signed tokens
/// - Return `AuthError::TokenExpired` for expired tokens
#[async_trait]
pub trait SessionValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

/// Issues session tokens.
pub trait SessionIssuer: Send + Sync {
    fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError>;
}
