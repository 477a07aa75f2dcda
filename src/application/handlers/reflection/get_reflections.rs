//! GetReflectionsHandler - Query handler for a user's reflections.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::reflection::{index_by_prompt, Reflection, ReflectionError};
use crate::ports::ReflectionRepository;

pub struct GetReflectionsHandler {
    reflections: Arc<dyn ReflectionRepository>,
}

impl GetReflectionsHandler {
    pub fn new(reflections: Arc<dyn ReflectionRepository>) -> Self {
        Self { reflections }
    }

    /// Reflections keyed by prompt.
    pub async fn handle(&self, user_id: UserId) -> Result<BTreeMap<String, Reflection>, ReflectionError> {
        let stored = self.reflections.list_for_user(user_id).await?;
        let index = index_by_prompt(stored);
        tracing::debug!(%user_id, count = index.len(), "reflections loaded");
        Ok(index)
    }
}
