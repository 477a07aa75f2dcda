//! ListInstitutionsHandler - Query handler for the institution list.

use std::sync::Arc;

use crate::domain::directory::{DirectoryError, Institution};
use crate::ports::InstitutionRepository;

pub struct ListInstitutionsHandler {
    institutions: Arc<dyn InstitutionRepository>,
}

impl ListInstitutionsHandler {
    pub fn new(institutions: Arc<dyn InstitutionRepository>) -> Self {
        Self { institutions }
    }

    pub async fn handle(&self) -> Result<Vec<Institution>, DirectoryError> {
        Ok(self.institutions.list().await?)
    }
}
