//! ListProfessionalsHandler - Query handler for the professional list.

use std::sync::Arc;

use crate::domain::directory::{DirectoryError, Professional};
use crate::ports::ProfessionalRepository;

pub struct ListProfessionalsHandler {
    professionals: Arc<dyn ProfessionalRepository>,
}

impl ListProfessionalsHandler {
    pub fn new(professionals: Arc<dyn ProfessionalRepository>) -> Self {
        Self { professionals }
    }

    pub async fn handle(&self) -> Result<Vec<Professional>, DirectoryError> {
        Ok(self.professionals.list().await?)
    }
}
