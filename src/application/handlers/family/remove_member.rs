//! RemoveFamilyMemberHandler - Command handler for deleting a family member.

use std::sync::Arc;

use crate::domain::family::{same_family, FamilyError};
use crate::domain::foundation::{ErrorCode, UserId};
use crate::ports::UserRepository;

#[derive(Debug, Clone, Copy)]
pub struct RemoveFamilyMemberCommand {
    pub actor: UserId,
    pub member: UserId,
}

/// Result of a removal, carrying the removed member's name.
#[derive(Debug, Clone)]
pub struct RemoveFamilyMemberResult {
    pub name: String,
}

pub struct RemoveFamilyMemberHandler {
    users: Arc<dyn UserRepository>,
}

impl RemoveFamilyMemberHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        cmd: RemoveFamilyMemberCommand,
    ) -> Result<RemoveFamilyMemberResult, FamilyError> {
        // 1. Load both sides
        let actor = self.users.find_by_id(cmd.actor).await?;
        let member = self.users.find_by_id(cmd.member).await?;
        let (actor, member) = match (actor, member) {
            (Some(a), Some(m)) => (a, m),
            _ => return Err(FamilyError::MemberNotFound(cmd.member)),
        };

        // 2. Authorize
        if !same_family(actor.family_id, member.family_id) {
            return Err(FamilyError::Forbidden);
        }

        // 3. Delete with diagnoses and reflections
        self.users
            .delete_with_history(member.id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::UserNotFound => FamilyError::MemberNotFound(cmd.member),
                _ => e.into(),
            })?;

        tracing::info!(member_id = %member.id, actor = %actor.id, "family member removed");
        Ok(RemoveFamilyMemberResult { name: member.name })
    }
}
