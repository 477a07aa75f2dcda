//! Directory - partner institutions and the professionals working there.

mod errors;
mod institution;
mod professional;

pub use errors::DirectoryError;
pub use institution::{Institution, InstitutionDraft, NewInstitution};
pub use professional::{NewProfessional, Professional, ProfessionalDraft};

use crate::domain::foundation::ValidationError;

/// An institution listed with its professionals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionRoster {
    pub institution: Institution,
    pub professionals: Vec<Professional>,
}

/// Pairs each institution with the professionals pointing at it.
///
/// Keeps the institutions' order. Professionals keep their relative order
/// within each institution; unaffiliated ones are left out.
pub fn group_rosters(
    institutions: Vec<Institution>,
    professionals: Vec<Professional>,
) -> Vec<InstitutionRoster> {
    let mut rosters: Vec<InstitutionRoster> = institutions
        .into_iter()
        .map(|institution| InstitutionRoster {
            institution,
            professionals: Vec::new(),
        })
        .collect();

    for professional in professionals {
        let Some(owner) = professional.institution_id else {
            continue;
        };
        if let Some(roster) = rosters.iter_mut().find(|r| r.institution.id == owner) {
            roster.professionals.push(professional);
        }
    }
    rosters
}

pub(crate) fn required_text(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    optional_text(value).ok_or_else(|| ValidationError::empty_field(field))
}

pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{InstitutionId, ProfessionalId, Timestamp};

    fn institution(id: i64, name: &str) -> Institution {
        Institution {
            id: InstitutionId::from_i64(id),
            name: name.to_string(),
            kind: "Clínica".to_string(),
            address: None,
            phone: None,
            email: None,
            description: None,
            specialties: None,
            created_at: Timestamp::now(),
        }
    }

    fn professional(id: i64, name: &str, institution: Option<i64>) -> Professional {
        Professional {
            id: ProfessionalId::from_i64(id),
            name: name.to_string(),
            profession: None,
            specialty: "Psicologia".to_string(),
            phone: None,
            email: None,
            institution_id: institution.map(InstitutionId::from_i64),
            registration_number: String::new(),
            approach: String::new(),
            description: None,
            registered_at: Timestamp::now(),
        }
    }

    #[test]
    fn group_rosters_attaches_professionals_to_their_institution() {
        let rosters = group_rosters(
            vec![institution(1, "Alfa"), institution(2, "Beta")],
            vec![
                professional(1, "Ana", Some(2)),
                professional(2, "Bruno", None),
                professional(3, "Carla", Some(2)),
                professional(4, "Davi", Some(1)),
            ],
        );

        assert_eq!(rosters.len(), 2);
        assert_eq!(rosters[0].professionals.len(), 1);
        assert_eq!(rosters[0].professionals[0].name, "Davi");
        let names: Vec<_> = rosters[1].professionals.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Carla"]);
    }

    #[test]
    fn institution_without_professionals_has_empty_roster() {
        let rosters = group_rosters(vec![institution(1, "Alfa")], vec![]);
        assert!(rosters[0].professionals.is_empty());
    }

    #[test]
    fn optional_text_trims_and_drops_blanks() {
        assert_eq!(optional_text(Some("  x ".into())), Some("x".to_string()));
        assert_eq!(optional_text(Some("   ".into())), None);
        assert_eq!(optional_text(None), None);
    }
}
