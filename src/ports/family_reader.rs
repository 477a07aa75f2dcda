//! Read-only family queries.

use async_trait::async_trait;

use crate::domain::family::FamilyMember;
use crate::domain::foundation::{DomainError, FamilyId};

#[async_trait]
pub trait FamilyReader: Send + Sync {
    /// Members of a family with their latest diagnosis, ordered by user id.
    async fn members_with_latest(&self, family_id: FamilyId) -> Result<Vec<FamilyMember>, DomainError>;
}
