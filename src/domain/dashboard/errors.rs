//! Dashboard-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The session user no longer exists.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl DashboardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DashboardError::UserNotFound(_) => ErrorCode::UserNotFound,
            DashboardError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for DashboardError {
    fn from(err: DomainError) -> Self {
        DashboardError::Infrastructure(err.to_string())
    }
}
