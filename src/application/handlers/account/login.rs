//! LoginHandler - Command handler for password login.

use std::sync::Arc;

use crate::domain::account::{AccountError, Credentials, User};
use crate::ports::UserRepository;

#[derive(Debug, Clone, Default)]
pub struct LoginCommand {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
}

impl LoginHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<User, AccountError> {
        let credentials = Credentials::new(cmd.email.as_deref(), cmd.password.as_deref())?;

        let stored = self
            .users
            .find_credentials_by_email(&credentials.email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !credentials.matches(&stored.digest) {
            tracing::info!(user_id = %stored.user.id, "login rejected");
            return Err(AccountError::InvalidCredentials);
        }

        tracing::info!(user_id = %stored.user.id, "login succeeded");
        Ok(stored.user)
    }
}
