//! Questionnaire read port.

use async_trait::async_trait;

use crate::domain::assessment::Question;
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait QuestionReader: Send + Sync {
    /// Questions ordered by id, each with its options ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, DomainError>;
}
