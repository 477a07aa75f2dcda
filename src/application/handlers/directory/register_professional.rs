//! RegisterProfessionalHandler - Command handler for adding a professional.

use std::sync::Arc;

use crate::domain::directory::{DirectoryError, NewProfessional, Professional, ProfessionalDraft};
use crate::domain::foundation::Timestamp;
use crate::ports::ProfessionalRepository;

pub struct RegisterProfessionalHandler {
    professionals: Arc<dyn ProfessionalRepository>,
}

impl RegisterProfessionalHandler {
    pub fn new(professionals: Arc<dyn ProfessionalRepository>) -> Self {
        Self { professionals }
    }

    pub async fn handle(&self, draft: ProfessionalDraft) -> Result<Professional, DirectoryError> {
        // 1. Validate
        let professional = NewProfessional::from_draft(draft)?;

        // 2. Email must be unique when given
        if let Some(email) = professional.email.as_deref() {
            if self.professionals.email_in_use(email).await? {
                return Err(DirectoryError::DuplicateEmail);
            }
        }

        // 3. Persist
        let stored = self.professionals.create(&professional, Timestamp::now()).await?;
        tracing::info!(professional_id = %stored.id, name = %stored.name, "professional registered");
        Ok(stored)
    }
}
