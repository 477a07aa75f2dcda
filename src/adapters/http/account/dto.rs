//! HTTP DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::dto::lenient_i32;
use crate::application::handlers::account::{LoginCommand, RegisterCommand};
use crate::domain::foundation::{AuthenticatedUser, UserId};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create an account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub senha: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub idade: Option<i32>,
}

impl From<RegisterRequest> for RegisterCommand {
    fn from(req: RegisterRequest) -> Self {
        RegisterCommand {
            name: req.nome,
            email: req.email,
            password: req.senha,
            age: req.idade,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub senha: Option<String>,
}

impl From<LoginRequest> for LoginCommand {
    fn from(req: LoginRequest) -> Self {
        LoginCommand {
            email: req.email,
            password: req.senha,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub usuario_id: UserId,
}

/// Session identity as the pages read it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUserView {
    pub id: UserId,
    pub nome: String,
    pub email: String,
}

impl From<AuthenticatedUser> for SessionUserView {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            nome: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub usuario: SessionUserView,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckAuthResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario: Option<SessionUserView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_maps_portuguese_fields() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"nome": "Ana", "email": "ana@x.com", "senha": "segredo", "idade": "35"}"#,
        )
        .unwrap();
        let cmd: RegisterCommand = req.into();
        assert_eq!(cmd.name.as_deref(), Some("Ana"));
        assert_eq!(cmd.password.as_deref(), Some("segredo"));
        assert_eq!(cmd.age, Some(35));
    }

    #[test]
    fn anonymous_check_auth_omits_user() {
        let body = serde_json::to_value(CheckAuthResponse {
            authenticated: false,
            usuario: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"authenticated": false}));
    }
}
