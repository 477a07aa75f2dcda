//! RegisterInstitutionHandler - Command handler for adding an institution.

use std::sync::Arc;

use crate::domain::directory::{DirectoryError, Institution, InstitutionDraft, NewInstitution};
use crate::domain::foundation::Timestamp;
use crate::ports::InstitutionRepository;

pub struct RegisterInstitutionHandler {
    institutions: Arc<dyn InstitutionRepository>,
}

impl RegisterInstitutionHandler {
    pub fn new(institutions: Arc<dyn InstitutionRepository>) -> Self {
        Self { institutions }
    }

    pub async fn handle(&self, draft: InstitutionDraft) -> Result<Institution, DirectoryError> {
        let institution = NewInstitution::from_draft(draft)?;
        let stored = self.institutions.create(&institution, Timestamp::now()).await?;
        tracing::info!(institution_id = %stored.id, name = %stored.name, "institution registered");
        Ok(stored)
    }
}
