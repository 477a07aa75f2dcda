//! Session configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest accepted signing secret.
pub const MIN_SECRET_LEN: usize = 16;

/// Session token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    pub secret_key: SecretString,

    /// Session lifetime in hours
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,

    /// Mark the session cookie `Secure`. Defaults to true in production.
    pub cookie_secure: Option<bool>,
}

impl AuthConfig {
    /// Get session TTL as Duration
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_hours * 3600)
    }

    /// Whether the session cookie carries the `Secure` attribute.
    pub fn secure_cookie(&self, environment: &Environment) -> bool {
        self.cookie_secure
            .unwrap_or(*environment == Environment::Production)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self.secret_key.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__SECRET_KEY"));
        }
        if secret.chars().count() < MIN_SECRET_LEN {
            return Err(ValidationError::SecretTooShort(MIN_SECRET_LEN));
        }
        if self.session_ttl_hours == 0 || self.session_ttl_hours > 8760 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

fn default_session_ttl() -> u64 {
    168
}
