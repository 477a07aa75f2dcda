//! GetFamilyHandler - Query handler for the family panorama.

use std::sync::Arc;

use crate::domain::family::{summarize_family, FamilyError, FamilySummary};
use crate::domain::foundation::UserId;
use crate::ports::{FamilyReader, UserRepository};

pub struct GetFamilyHandler {
    users: Arc<dyn UserRepository>,
    families: Arc<dyn FamilyReader>,
}

impl GetFamilyHandler {
    pub fn new(users: Arc<dyn UserRepository>, families: Arc<dyn FamilyReader>) -> Self {
        Self { users, families }
    }

    /// Fails with `NoFamily` when the user is unknown or not attached to a family.
    pub async fn handle(&self, user_id: UserId) -> Result<FamilySummary, FamilyError> {
        let family_id = self
            .users
            .find_by_id(user_id)
            .await?
            .and_then(|u| u.family_id)
            .ok_or(FamilyError::NoFamily)?;

        let members = self.families.members_with_latest(family_id).await?;
        Ok(summarize_family(Some(&members)))
    }
}
