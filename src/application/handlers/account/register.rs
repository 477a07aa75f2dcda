//! RegisterHandler - Command handler for sign-up.

use std::sync::Arc;

use crate::domain::account::{AccountError, Family, Registration, User};
use crate::domain::foundation::Timestamp;
use crate::ports::UserRepository;

/// Raw registration input.
#[derive(Debug, Clone, Default)]
pub struct RegisterCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub user: User,
    pub family: Family,
}

pub struct RegisterHandler {
    users: Arc<dyn UserRepository>,
}

impl RegisterHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<RegisterResult, AccountError> {
        // 1. Validate
        let registration = Registration::new(
            cmd.name.as_deref(),
            cmd.email.as_deref(),
            cmd.password.as_deref(),
            cmd.age,
        )?;

        // 2. Reject duplicates early; the store enforces it again
        if self
            .users
            .find_credentials_by_email(registration.email())
            .await?
            .is_some()
        {
            return Err(AccountError::EmailTaken);
        }

        // 3. Create family and user together
        let account = registration.into_account(Timestamp::now())?;
        let (user, family) = self.users.create_account(&account).await?;

        tracing::info!(user_id = %user.id, family_id = %family.id, "account registered");
        Ok(RegisterResult { user, family })
    }
}
