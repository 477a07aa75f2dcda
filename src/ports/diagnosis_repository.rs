//! Diagnosis repository port.
//!
//! Diagnoses are append-only: saved once, never updated.

use async_trait::async_trait;

use crate::domain::assessment::{Diagnosis, DiagnosisSnapshot, NewDiagnosis};
use crate::domain::foundation::{DomainError, Timestamp, UserId};

#[async_trait]
pub trait DiagnosisRepository: Send + Sync {
    /// Persists a diagnosis stamped with `at` and returns the stored record.
    async fn save(&self, diagnosis: &NewDiagnosis, at: Timestamp) -> Result<Diagnosis, DomainError>;

    /// Most recent diagnosis for a user, if any.
    async fn latest_for_user(&self, user_id: UserId) -> Result<Option<Diagnosis>, DomainError>;

    /// Every diagnosis for a user, oldest first.
    async fn history_for_user(&self, user_id: UserId) -> Result<Vec<DiagnosisSnapshot>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnosis_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DiagnosisRepository) {}
    }
}
