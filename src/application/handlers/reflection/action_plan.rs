//! Action plan handlers. The plan is an opaque JSON document on the user row.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::account::action_plan_or_empty;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::reflection::ReflectionError;
use crate::ports::UserRepository;

fn map_user_error(user_id: UserId) -> impl Fn(DomainError) -> ReflectionError {
    move |e| match e.code {
        ErrorCode::UserNotFound => ReflectionError::UserNotFound(user_id),
        _ => e.into(),
    }
}

pub struct GetActionPlanHandler {
    users: Arc<dyn UserRepository>,
}

impl GetActionPlanHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// The stored plan, or `{}` when none was saved.
    pub async fn handle(&self, user_id: UserId) -> Result<Value, ReflectionError> {
        let stored = self
            .users
            .load_action_plan(user_id)
            .await
            .map_err(map_user_error(user_id))?;
        Ok(action_plan_or_empty(stored))
    }
}

#[derive(Debug, Clone)]
pub struct SaveActionPlanCommand {
    pub user_id: UserId,
    pub plan: Value,
}

pub struct SaveActionPlanHandler {
    users: Arc<dyn UserRepository>,
}

impl SaveActionPlanHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: SaveActionPlanCommand) -> Result<(), ReflectionError> {
        self.users
            .save_action_plan(cmd.user_id, &cmd.plan)
            .await
            .map_err(map_user_error(cmd.user_id))?;
        tracing::info!(user_id = %cmd.user_id, "action plan saved");
        Ok(())
    }
}
