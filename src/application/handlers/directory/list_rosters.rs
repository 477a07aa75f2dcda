//! ListRostersHandler - Query handler for institutions with their professionals.

use std::sync::Arc;

use crate::domain::directory::{group_rosters, DirectoryError, InstitutionRoster};
use crate::ports::{InstitutionRepository, ProfessionalRepository};

pub struct ListRostersHandler {
    institutions: Arc<dyn InstitutionRepository>,
    professionals: Arc<dyn ProfessionalRepository>,
}

impl ListRostersHandler {
    pub fn new(
        institutions: Arc<dyn InstitutionRepository>,
        professionals: Arc<dyn ProfessionalRepository>,
    ) -> Self {
        Self {
            institutions,
            professionals,
        }
    }

    pub async fn handle(&self) -> Result<Vec<InstitutionRoster>, DirectoryError> {
        let institutions = self.institutions.list().await?;
        let professionals = self.professionals.list().await?;
        let rosters = group_rosters(institutions, professionals);
        tracing::debug!(institutions = rosters.len(), "rosters loaded");
        Ok(rosters)
    }
}
