//! Partner institutions.

use crate::domain::foundation::{InstitutionId, Timestamp, ValidationError};

use super::{optional_text, required_text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Institution {
    pub id: InstitutionId,
    pub name: String,
    /// Kind of institution (clinic, school, NGO...). Free text.
    pub kind: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub specialties: Option<String>,
    pub created_at: Timestamp,
}

/// A validated institution registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstitution {
    pub name: String,
    pub kind: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub specialties: Option<String>,
}

/// Raw institution fields as submitted.
#[derive(Debug, Clone, Default)]
pub struct InstitutionDraft {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub specialties: Option<String>,
}

impl NewInstitution {
    /// Name and kind are required. Blank optional fields become `None`.
    pub fn from_draft(draft: InstitutionDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("nome", draft.name)?,
            kind: required_text("tipo", draft.kind)?,
            address: optional_text(draft.address),
            phone: optional_text(draft.phone),
            email: optional_text(draft.email),
            description: optional_text(draft.description),
            specialties: optional_text(draft.specialties),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_kind_are_required() {
        let err = NewInstitution::from_draft(InstitutionDraft {
            kind: Some("Clínica".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), "nome");

        let err = NewInstitution::from_draft(InstitutionDraft {
            name: Some("Centro".into()),
            kind: Some("   ".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), "tipo");
    }

    #[test]
    fn blank_optional_fields_are_dropped() {
        let institution = NewInstitution::from_draft(InstitutionDraft {
            name: Some("Centro Vida".into()),
            kind: Some("ONG".into()),
            phone: Some("".into()),
            email: Some("contato@vida.org".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(institution.phone, None);
        assert_eq!(institution.email.as_deref(), Some("contato@vida.org"));
    }
}
