//! Strongly-typed identifier value objects.
//!
//! Every entity is keyed by a database-generated `BIGSERIAL`, so identifiers
//! wrap an `i64` rather than a UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a raw database key.
            ///
            /// # Errors
            ///
            /// Returns `OutOfRange` for non-positive keys.
            pub fn new(value: i64) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::out_of_range(
                        $field,
                        1,
                        i32::MAX,
                        value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
                    ));
                }
                Ok(Self(value))
            }

            /// Wraps a key read back from the store without validation.
            pub fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw key.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ValidationError::invalid_format($field, "expected an integer"))?;
                Self::new(value)
            }
        }
    };
}

define_id!(
    /// Identifier of a user account (registered user or family member).
    UserId,
    "user_id"
);

define_id!(
    /// Identifier of a family group.
    FamilyId,
    "family_id"
);

define_id!(
    /// Identifier of a stored diagnosis.
    DiagnosisId,
    "diagnosis_id"
);

define_id!(
    /// Identifier of a questionnaire question.
    QuestionId,
    "question_id"
);

define_id!(
    /// Identifier of a partner institution.
    InstitutionId,
    "institution_id"
);

define_id!(
    /// Identifier of a registered professional.
    ProfessionalId,
    "professional_id"
);
