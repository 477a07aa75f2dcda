//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the Netendencia domain.

mod auth;
mod errors;
mod ids;
mod stats;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DiagnosisId, FamilyId, InstitutionId, ProfessionalId, QuestionId, UserId};
pub use stats::{percentage, round_one_decimal, rounded_mean};
pub use timestamp::Timestamp;
