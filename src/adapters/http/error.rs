//! HTTP error mapping shared by every endpoint.
//!
//! Each area error converts into `ApiError`, which picks the status code from
//! the error's `ErrorCode` and renders `{"success": false, "code", "error"}`.
//! Infrastructure failures are logged and replaced by a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::account::AccountError;
use crate::domain::assessment::AssessmentError;
use crate::domain::dashboard::DashboardError;
use crate::domain::directory::DirectoryError;
use crate::domain::family::FamilyError;
use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationError};
use crate::domain::reflection::ReflectionError;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub error: String,
    /// Offending field for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campo: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            error: error.into(),
            campo: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.campo = Some(field.into());
        self
    }
}

/// An error ready to be rendered as an HTTP response.
#[derive(Debug, Clone)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    field: Option<String>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    fn with_field(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        if !field.is_empty() {
            self.field = Some(field);
        }
        self
    }

    pub fn unauthenticated() -> Self {
        Self::new(ErrorCode::Unauthorized, "Not authenticated")
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.code)
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        // A missing family is a precondition failure, not a missing resource.
        ErrorCode::ValidationFailed | ErrorCode::Conflict | ErrorCode::FamilyNotFound => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::UserNotFound
        | ErrorCode::DiagnosisNotFound
        | ErrorCode::InstitutionNotFound
        | ErrorCode::ProfessionalNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn is_infrastructure(code: ErrorCode) -> bool {
    matches!(code, ErrorCode::DatabaseError | ErrorCode::InternalError)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if is_infrastructure(self.code) {
            tracing::error!(code = %self.code, error = %self.message, "request failed");
            INTERNAL_MESSAGE.to_string()
        } else {
            tracing::debug!(code = %self.code, error = %self.message, "request rejected");
            self.message
        };

        let mut body = ErrorResponse::new(self.code.to_string(), message);
        if let Some(field) = self.field {
            body = body.with_field(field);
        }
        (status, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Conversions
// ════════════════════════════════════════════════════════════════════════════════

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let field = err.details.get("field").cloned().unwrap_or_default();
        ApiError::new(err.code, err.message).with_field(field)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        ApiError::new(ErrorCode::ValidationFailed, err.to_string()).with_field(field)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::IssueFailed(_) => ApiError::new(ErrorCode::InternalError, err.to_string()),
            AuthError::InvalidToken | AuthError::TokenExpired => {
                ApiError::new(ErrorCode::Unauthorized, err.to_string())
            }
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        let code = err.code();
        match err {
            AccountError::ValidationFailed { field, message } => {
                ApiError::new(code, message).with_field(field)
            }
            other => ApiError::new(code, other.to_string()),
        }
    }
}

impl From<AssessmentError> for ApiError {
    fn from(err: AssessmentError) -> Self {
        let code = err.code();
        match err {
            AssessmentError::InvalidAnswer { .. } => {
                ApiError::new(code, err.to_string()).with_field("respostas")
            }
            other => ApiError::new(code, other.to_string()),
        }
    }
}

impl From<FamilyError> for ApiError {
    fn from(err: FamilyError) -> Self {
        let code = err.code();
        match err {
            FamilyError::ValidationFailed { field, message } => {
                ApiError::new(code, message).with_field(field)
            }
            other => ApiError::new(code, other.to_string()),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        let code = err.code();
        match err {
            DirectoryError::ValidationFailed { field, message } => {
                ApiError::new(code, message).with_field(field)
            }
            DirectoryError::DuplicateEmail => {
                ApiError::new(code, err.to_string()).with_field("email")
            }
            other => ApiError::new(code, other.to_string()),
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        ApiError::new(err.code(), err.to_string())
    }
}

impl From<ReflectionError> for ApiError {
    fn from(err: ReflectionError) -> Self {
        ApiError::new(err.code(), err.to_string())
    }
}
