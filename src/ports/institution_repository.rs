//! Institution repository port.

use async_trait::async_trait;

use crate::domain::directory::{Institution, NewInstitution};
use crate::domain::foundation::{DomainError, InstitutionId, Timestamp};

#[async_trait]
pub trait InstitutionRepository: Send + Sync {
    /// All institutions ordered by name.
    async fn list(&self) -> Result<Vec<Institution>, DomainError>;

    async fn create(&self, institution: &NewInstitution, at: Timestamp) -> Result<Institution, DomainError>;

    /// Deletes an institution. Its professionals stay, unaffiliated.
    ///
    /// # Errors
    ///
    /// - `InstitutionNotFound` if nothing was deleted
    async fn delete(&self, id: InstitutionId) -> Result<(), DomainError>;
}
