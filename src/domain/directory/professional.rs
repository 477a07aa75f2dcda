//! Partner professionals.

use crate::domain::foundation::{InstitutionId, ProfessionalId, Timestamp, ValidationError};

use super::{optional_text, required_text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professional {
    pub id: ProfessionalId,
    pub name: String,
    pub profession: Option<String>,
    pub specialty: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub institution_id: Option<InstitutionId>,
    /// Professional board registration, empty when not given.
    pub registration_number: String,
    /// Therapeutic approach, empty when not given.
    pub approach: String,
    pub description: Option<String>,
    pub registered_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfessional {
    pub name: String,
    pub profession: Option<String>,
    pub specialty: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub institution_id: Option<InstitutionId>,
    pub registration_number: String,
    pub approach: String,
    pub description: Option<String>,
}

/// Raw professional fields as submitted.
#[derive(Debug, Clone, Default)]
pub struct ProfessionalDraft {
    pub name: Option<String>,
    pub profession: Option<String>,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub institution_id: Option<i64>,
    pub registration_number: Option<String>,
    pub approach: Option<String>,
    pub description: Option<String>,
}

impl NewProfessional {
    /// Name and specialty are required.
    pub fn from_draft(draft: ProfessionalDraft) -> Result<Self, ValidationError> {
        let institution_id = draft.institution_id.map(InstitutionId::new).transpose()?;
        Ok(Self {
            name: required_text("nome", draft.name)?,
            specialty: required_text("especialidade", draft.specialty)?,
            profession: optional_text(draft.profession),
            phone: optional_text(draft.phone),
            email: optional_text(draft.email),
            institution_id,
            registration_number: optional_text(draft.registration_number).unwrap_or_default(),
            approach: optional_text(draft.approach).unwrap_or_default(),
            description: optional_text(draft.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProfessionalDraft {
        ProfessionalDraft {
            name: Some("Dra. Lúcia".into()),
            specialty: Some("Dependência digital".into()),
            ..Default::default()
        }
    }

    #[test]
    fn specialty_is_required() {
        let err = NewProfessional::from_draft(ProfessionalDraft {
            specialty: None,
            ..draft()
        })
        .unwrap_err();
        assert_eq!(err.field(), "especialidade");
    }

    #[test]
    fn missing_registration_and_approach_default_to_empty() {
        let professional = NewProfessional::from_draft(draft()).unwrap();
        assert_eq!(professional.registration_number, "");
        assert_eq!(professional.approach, "");
        assert_eq!(professional.institution_id, None);
    }

    #[test]
    fn non_positive_institution_id_is_rejected() {
        let result = NewProfessional::from_draft(ProfessionalDraft {
            institution_id: Some(0),
            ..draft()
        });
        assert!(result.is_err());
    }
}
