//! Family-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    /// The caller is not attached to any family.
    #[error("User does not belong to a family")]
    NoFamily,

    #[error("Member not found: {0}")]
    MemberNotFound(UserId),

    /// The member belongs to another family.
    #[error("You do not have permission to manage this member")]
    Forbidden,

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl FamilyError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FamilyError::NoFamily => ErrorCode::FamilyNotFound,
            FamilyError::MemberNotFound(_) => ErrorCode::UserNotFound,
            FamilyError::Forbidden => ErrorCode::Forbidden,
            FamilyError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            FamilyError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for FamilyError {
    fn from(err: ValidationError) -> Self {
        FamilyError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for FamilyError {
    fn from(err: DomainError) -> Self {
        FamilyError::Infrastructure(err.to_string())
    }
}
