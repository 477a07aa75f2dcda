//! RemoveInstitutionHandler - Command handler for deleting an institution.

use std::sync::Arc;

use crate::domain::directory::DirectoryError;
use crate::domain::foundation::{ErrorCode, InstitutionId};
use crate::ports::InstitutionRepository;

pub struct RemoveInstitutionHandler {
    institutions: Arc<dyn InstitutionRepository>,
}

impl RemoveInstitutionHandler {
    pub fn new(institutions: Arc<dyn InstitutionRepository>) -> Self {
        Self { institutions }
    }

    pub async fn handle(&self, id: InstitutionId) -> Result<(), DirectoryError> {
        self.institutions.delete(id).await.map_err(|e| match e.code {
            ErrorCode::InstitutionNotFound => DirectoryError::InstitutionNotFound(id),
            _ => e.into(),
        })?;
        tracing::info!(institution_id = %id, "institution removed");
        Ok(())
    }
}
