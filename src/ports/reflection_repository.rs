//! Reflection repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::reflection::{Reflection, ReflectionSet};

#[async_trait]
pub trait ReflectionRepository: Send + Sync {
    /// A user's reflections, newest first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Reflection>, DomainError>;

    /// Deletes every reflection of the user and inserts `set`, atomically.
    /// Returns how many were stored.
    async fn replace_all(
        &self,
        user_id: UserId,
        set: &ReflectionSet,
        at: Timestamp,
    ) -> Result<usize, DomainError>;
}
