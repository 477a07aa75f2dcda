//! Professional repository port.

use async_trait::async_trait;

use crate::domain::directory::{NewProfessional, Professional};
use crate::domain::foundation::{DomainError, ProfessionalId, Timestamp};

#[async_trait]
pub trait ProfessionalRepository: Send + Sync {
    /// All professionals ordered by name.
    async fn list(&self) -> Result<Vec<Professional>, DomainError>;

    /// True if a professional already uses this email.
    async fn email_in_use(&self, email: &str) -> Result<bool, DomainError>;

    /// # Errors
    ///
    /// - `Conflict` if the email is taken
    async fn create(&self, professional: &NewProfessional, at: Timestamp) -> Result<Professional, DomainError>;

    /// # Errors
    ///
    /// - `ProfessionalNotFound` if nothing was deleted
    async fn delete(&self, id: ProfessionalId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn professional_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProfessionalRepository) {}
    }
}
