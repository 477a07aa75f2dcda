//! Directory command and query handlers.

mod list_institutions;
mod list_professionals;
mod list_rosters;
mod register_institution;
mod register_professional;
mod remove_institution;
mod remove_professional;

pub use list_institutions::ListInstitutionsHandler;
pub use list_professionals::ListProfessionalsHandler;
pub use list_rosters::ListRostersHandler;
pub use register_institution::RegisterInstitutionHandler;
pub use register_professional::RegisterProfessionalHandler;
pub use remove_institution::RemoveInstitutionHandler;
pub use remove_professional::RemoveProfessionalHandler;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::{
        DirectoryError, Institution, InstitutionDraft, NewInstitution, NewProfessional,
        Professional, ProfessionalDraft,
    };
    use crate::domain::foundation::{
        DomainError, ErrorCode, InstitutionId, ProfessionalId, Timestamp,
    };
    use crate::ports::{InstitutionRepository, ProfessionalRepository};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    #[derive(Default)]
    struct MockInstitutions {
        rows: Mutex<Vec<Institution>>,
    }

    #[async_trait]
    impl InstitutionRepository for MockInstitutions {
        async fn list(&self) -> Result<Vec<Institution>, DomainError> {
            let mut rows = self.rows.lock().unwrap().clone();
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(rows)
        }

        async fn create(&self, i: &NewInstitution, at: Timestamp) -> Result<Institution, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let stored = Institution {
                id: InstitutionId::from_i64(rows.len() as i64 + 1),
                name: i.name.clone(),
                kind: i.kind.clone(),
                address: i.address.clone(),
                phone: i.phone.clone(),
                email: i.email.clone(),
                description: i.description.clone(),
                specialties: i.specialties.clone(),
                created_at: at,
            };
            rows.push(stored.clone());
            Ok(stored)
        }

        async fn delete(&self, id: InstitutionId) -> Result<(), DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            if rows.len() == before {
                return Err(DomainError::new(ErrorCode::InstitutionNotFound, "missing"));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockProfessionals {
        rows: Mutex<Vec<Professional>>,
    }

    #[async_trait]
    impl ProfessionalRepository for MockProfessionals {
        async fn list(&self) -> Result<Vec<Professional>, DomainError> {
            let mut rows = self.rows.lock().unwrap().clone();
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(rows)
        }

        async fn email_in_use(&self, email: &str) -> Result<bool, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .any(|p| p.email.as_deref() == Some(email)))
        }

        async fn create(&self, p: &NewProfessional, at: Timestamp) -> Result<Professional, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let stored = Professional {
                id: ProfessionalId::from_i64(rows.len() as i64 + 1),
                name: p.name.clone(),
                profession: p.profession.clone(),
                specialty: p.specialty.clone(),
                phone: p.phone.clone(),
                email: p.email.clone(),
                institution_id: p.institution_id,
                registration_number: p.registration_number.clone(),
                approach: p.approach.clone(),
                description: p.description.clone(),
                registered_at: at,
            };
            rows.push(stored.clone());
            Ok(stored)
        }

        async fn delete(&self, id: ProfessionalId) -> Result<(), DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            if rows.len() == before {
                return Err(DomainError::new(ErrorCode::ProfessionalNotFound, "missing"));
            }
            Ok(())
        }
    }

    fn institution_draft(name: &str) -> InstitutionDraft {
        InstitutionDraft {
            name: Some(name.to_string()),
            kind: Some("Clínica".to_string()),
            ..Default::default()
        }
    }

    fn professional_draft(name: &str, email: Option<&str>, institution: Option<i64>) -> ProfessionalDraft {
        ProfessionalDraft {
            name: Some(name.to_string()),
            specialty: Some("Psicologia".to_string()),
            email: email.map(str::to_string),
            institution_id: institution,
            ..Default::default()
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Institutions
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn registered_institutions_are_listed_by_name() {
        let repo = Arc::new(MockInstitutions::default());
        let register = RegisterInstitutionHandler::new(repo.clone());
        register.handle(institution_draft("Zeta")).await.unwrap();
        register.handle(institution_draft("Alfa")).await.unwrap();

        let listed = ListInstitutionsHandler::new(repo).handle().await.unwrap();

        let names: Vec<_> = listed.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Alfa", "Zeta"]);
    }

    #[tokio::test]
    async fn institution_requires_kind() {
        let register = RegisterInstitutionHandler::new(Arc::new(MockInstitutions::default()));

        let result = register
            .handle(InstitutionDraft {
                name: Some("Alfa".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(DirectoryError::ValidationFailed { ref field, .. }) if field == "tipo"));
    }

    #[tokio::test]
    async fn removing_unknown_institution_is_not_found() {
        let remove = RemoveInstitutionHandler::new(Arc::new(MockInstitutions::default()));

        let result = remove.handle(InstitutionId::from_i64(9)).await;

        assert!(matches!(result, Err(DirectoryError::InstitutionNotFound(_))));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Professionals
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn duplicate_professional_email_is_rejected() {
        let repo = Arc::new(MockProfessionals::default());
        let register = RegisterProfessionalHandler::new(repo.clone());
        register
            .handle(professional_draft("Ana", Some("ana@clinica.com"), None))
            .await
            .unwrap();

        let result = register
            .handle(professional_draft("Outra Ana", Some("ana@clinica.com"), None))
            .await;

        assert!(matches!(result, Err(DirectoryError::DuplicateEmail)));
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn professionals_without_email_never_collide() {
        let register = RegisterProfessionalHandler::new(Arc::new(MockProfessionals::default()));
        register.handle(professional_draft("Ana", None, None)).await.unwrap();
        assert!(register.handle(professional_draft("Bruno", None, None)).await.is_ok());
    }

    #[tokio::test]
    async fn removing_unknown_professional_is_not_found() {
        let remove = RemoveProfessionalHandler::new(Arc::new(MockProfessionals::default()));

        let result = remove.handle(ProfessionalId::from_i64(9)).await;

        assert!(matches!(result, Err(DirectoryError::ProfessionalNotFound(_))));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rosters
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn rosters_group_professionals_under_institutions() {
        let institutions = Arc::new(MockInstitutions::default());
        let professionals = Arc::new(MockProfessionals::default());
        let alfa = RegisterInstitutionHandler::new(institutions.clone())
            .handle(institution_draft("Alfa"))
            .await
            .unwrap();
        let register = RegisterProfessionalHandler::new(professionals.clone());
        register
            .handle(professional_draft("Carla", None, Some(alfa.id.as_i64())))
            .await
            .unwrap();
        register.handle(professional_draft("Bruno", None, None)).await.unwrap();

        let rosters = ListRostersHandler::new(institutions, professionals)
            .handle()
            .await
            .unwrap();

        assert_eq!(rosters.len(), 1);
        assert_eq!(rosters[0].professionals.len(), 1);
        assert_eq!(rosters[0].professionals[0].name, "Carla");
    }
}
