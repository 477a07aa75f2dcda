//! Account-specific error types.

use thiserror::Error;

use super::PasswordHashError;
use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("This email is already registered")]
    EmailTaken,

    /// Unknown email or wrong password. The two are not distinguished.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AccountError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AccountError::EmailTaken => ErrorCode::Conflict,
            AccountError::InvalidCredentials => ErrorCode::Unauthorized,
            AccountError::UserNotFound(_) => ErrorCode::UserNotFound,
            AccountError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for AccountError {
    fn from(err: ValidationError) -> Self {
        AccountError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Conflict => AccountError::EmailTaken,
            _ => AccountError::Infrastructure(err.to_string()),
        }
    }
}

impl From<PasswordHashError> for AccountError {
    fn from(err: PasswordHashError) -> Self {
        AccountError::Infrastructure(err.to_string())
    }
}
