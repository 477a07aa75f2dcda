//! AddFamilyMemberHandler - Command handler for adding a member to the caller's family.

use std::sync::Arc;

use crate::domain::account::{validate_age, User};
use crate::domain::family::{FamilyError, NewFamilyMember};
use crate::domain::foundation::{UserId, ValidationError};
use crate::ports::UserRepository;

/// Command to add a family member.
#[derive(Debug, Clone)]
pub struct AddFamilyMemberCommand {
    pub actor: UserId,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub relationship: Option<String>,
}

pub struct AddFamilyMemberHandler {
    users: Arc<dyn UserRepository>,
}

impl AddFamilyMemberHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: AddFamilyMemberCommand) -> Result<User, FamilyError> {
        // 1. Validate input
        let name = cmd
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ValidationError::empty_field("nome"))?;
        let age = validate_age(cmd.age)?;
        let relationship = cmd
            .relationship
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        // 2. Resolve the caller's family
        let family_id = self
            .users
            .find_by_id(cmd.actor)
            .await?
            .and_then(|u| u.family_id)
            .ok_or(FamilyError::NoFamily)?;

        // 3. Persist
        let member = self
            .users
            .add_family_member(&NewFamilyMember {
                family_id,
                name,
                age,
                relationship,
            })
            .await?;

        tracing::info!(member_id = %member.id, %family_id, "family member added");
        Ok(member)
    }
}
