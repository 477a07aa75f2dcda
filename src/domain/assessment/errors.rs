//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Errors raised while scoring or recording a diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// An answer lacks an integer `pontuacao`. Never coerced.
    #[error("Answer #{index} is invalid: {reason}")]
    InvalidAnswer { index: usize, reason: String },

    /// The summed score does not fit the stored integer column.
    #[error("Total score {0} is out of range")]
    ScoreOutOfRange(i64),

    /// The target user does not exist.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// The caller may not record a diagnosis for this user.
    #[error("No permission for this member")]
    Forbidden,

    /// Store failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AssessmentError {
    pub fn invalid_answer(index: usize, reason: impl Into<String>) -> Self {
        AssessmentError::InvalidAnswer {
            index,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::InvalidAnswer { .. } | AssessmentError::ScoreOutOfRange(_) => {
                ErrorCode::ValidationFailed
            }
            AssessmentError::UserNotFound(_) => ErrorCode::UserNotFound,
            AssessmentError::Forbidden => ErrorCode::Forbidden,
            AssessmentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        AssessmentError::Infrastructure(err.to_string())
    }
}
