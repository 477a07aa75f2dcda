//! Directory-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, InstitutionId, ProfessionalId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("A professional with this email already exists")]
    DuplicateEmail,

    #[error("Institution not found: {0}")]
    InstitutionNotFound(InstitutionId),

    #[error("Professional not found: {0}")]
    ProfessionalNotFound(ProfessionalId),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl DirectoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DirectoryError::ValidationFailed { .. } | DirectoryError::DuplicateEmail => {
                ErrorCode::ValidationFailed
            }
            DirectoryError::InstitutionNotFound(_) => ErrorCode::InstitutionNotFound,
            DirectoryError::ProfessionalNotFound(_) => ErrorCode::ProfessionalNotFound,
            DirectoryError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for DirectoryError {
    fn from(err: ValidationError) -> Self {
        DirectoryError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for DirectoryError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Conflict => DirectoryError::DuplicateEmail,
            ErrorCode::ValidationFailed => DirectoryError::ValidationFailed {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            _ => DirectoryError::Infrastructure(err.to_string()),
        }
    }
}
