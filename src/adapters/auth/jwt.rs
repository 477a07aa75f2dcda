//! HS256 session tokens.
//!
//! Implements both `SessionIssuer` and `SessionValidator` with a single
//! shared secret. Tokens carry the user id in `sub` plus the display name
//! and email, so validation needs no store lookup.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionIssuer, SessionValidator};

/// Issuer claim written into and required from every token.
pub const ISSUER: &str = "netendencia";

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    /// User id
    sub: String,
    iss: String,
    /// Expiry (Unix epoch seconds)
    exp: i64,
    iat: i64,
    name: String,
    #[serde(default)]
    email: String,
}

/// Signs and verifies session tokens.
pub struct JwtSessions {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtSessions {
    pub fn new(secret: &SecretString, ttl: Duration) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            ttl,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

impl SessionIssuer for JwtSessions {
    fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: user.id.to_string(),
            iss: ISSUER.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
            name: user.name.clone(),
            email: user.email.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to sign session token");
            AuthError::IssueFailed(e.to_string())
        })
    }
}

#[async_trait]
impl SessionValidator for JwtSessions {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Self::validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("session token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::debug!(error = %e, "session token rejected");
                        AuthError::InvalidToken
                    }
                }
            })?;

        let claims = data.claims;
        let user_id: UserId = claims.sub.parse().map_err(|_| {
            tracing::warn!(sub = %claims.sub, "session token carries an invalid user id");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.name, claims.email))
    }
}

impl std::fmt::Debug for JwtSessions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessions")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-0123456789";

    fn sessions() -> JwtSessions {
        JwtSessions::new(&SecretString::new(SECRET.to_string()), Duration::from_secs(3600))
    }

    fn ana() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::from_i64(7), "Ana", "ana@example.com")
    }

    fn sign(claims: &SessionClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(exp_offset: i64, iss: &str, sub: &str) -> SessionClaims {
        let now = Utc::now().timestamp();
        SessionClaims {
            sub: sub.to_string(),
            iss: iss.to_string(),
            iat: now,
            exp: now + exp_offset,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn issued_token_validates_to_same_user() {
        let sessions = sessions();
        let token = sessions.issue(&ana()).unwrap();

        let user = sessions.validate(&token).await.unwrap();

        assert_eq!(user, ana());
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_invalid() {
        let token = sign(&claims(3600, ISSUER, "7"), "another-secret-987654321");

        let result = sessions().validate(&token).await;

        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let token = sign(&claims(-7200, ISSUER, "7"), SECRET);

        let result = sessions().validate(&token).await;

        assert_eq!(result, Err(AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn foreign_issuer_is_rejected() {
        let token = sign(&claims(3600, "someone-else", "7"), SECRET);

        assert_eq!(sessions().validate(&token).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn non_numeric_subject_is_rejected() {
        let token = sign(&claims(3600, ISSUER, "abc"), SECRET);

        assert_eq!(sessions().validate(&token).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        assert_eq!(sessions().validate("not-a-jwt").await, Err(AuthError::InvalidToken));
    }

    #[test]
    fn debug_hides_keys() {
        let rendered = format!("{:?}", sessions());
        assert!(!rendered.contains(SECRET));
    }
}
