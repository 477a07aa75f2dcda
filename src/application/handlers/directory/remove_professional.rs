//! RemoveProfessionalHandler - Command handler for deleting a professional.

use std::sync::Arc;

use crate::domain::directory::DirectoryError;
use crate::domain::foundation::{ErrorCode, ProfessionalId};
use crate::ports::ProfessionalRepository;

pub struct RemoveProfessionalHandler {
    professionals: Arc<dyn ProfessionalRepository>,
}

impl RemoveProfessionalHandler {
    pub fn new(professionals: Arc<dyn ProfessionalRepository>) -> Self {
        Self { professionals }
    }

    pub async fn handle(&self, id: ProfessionalId) -> Result<(), DirectoryError> {
        self.professionals.delete(id).await.map_err(|e| match e.code {
            ErrorCode::ProfessionalNotFound => DirectoryError::ProfessionalNotFound(id),
            _ => e.into(),
        })?;
        tracing::info!(professional_id = %id, "professional removed");
        Ok(())
    }
}
