//! SaveReflectionsHandler - Command handler replacing a user's reflections.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::reflection::{ReflectionError, ReflectionSet};
use crate::ports::ReflectionRepository;

#[derive(Debug, Clone)]
pub struct SaveReflectionsCommand {
    pub user_id: UserId,
    /// `(prompt, answer)` pairs as submitted. Blank answers are dropped.
    pub entries: Vec<(String, String)>,
}

pub struct SaveReflectionsHandler {
    reflections: Arc<dyn ReflectionRepository>,
}

impl SaveReflectionsHandler {
    pub fn new(reflections: Arc<dyn ReflectionRepository>) -> Self {
        Self { reflections }
    }

    /// Returns how many reflections were stored.
    pub async fn handle(&self, cmd: SaveReflectionsCommand) -> Result<usize, ReflectionError> {
        let submitted = cmd.entries.len();
        let set = ReflectionSet::from_entries(cmd.entries);
        let stored = self
            .reflections
            .replace_all(cmd.user_id, &set, Timestamp::now())
            .await?;

        tracing::info!(user_id = %cmd.user_id, submitted, stored, "reflections replaced");
        Ok(stored)
    }
}
