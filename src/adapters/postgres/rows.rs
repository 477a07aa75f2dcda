//! Conversions shared by the PostgreSQL adapters.

use chrono::{DateTime, Utc};

use crate::domain::account::User;
use crate::domain::assessment::Classification;
use crate::domain::foundation::{DomainError, ErrorCode, FamilyId, Timestamp, UserId};

/// Columns every `usuarios` query selects.
pub(crate) const USER_COLUMNS: &str =
    "id, nome, email, idade, familia_id, relacionamento, data_cadastro";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub nome: String,
    pub email: Option<String>,
    pub idade: Option<i32>,
    pub familia_id: Option<i64>,
    pub relacionamento: Option<String>,
    pub data_cadastro: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::from_i64(row.id),
            name: row.nome,
            email: row.email,
            age: row.idade,
            family_id: row.familia_id.map(FamilyId::from_i64),
            relationship: row.relacionamento,
            created_at: Timestamp::from_datetime(row.data_cadastro),
        }
    }
}

/// Parses a stored level. Rows are constrained to the three labels.
pub(crate) fn parse_level(label: &str) -> Result<Classification, DomainError> {
    Classification::from_label(label).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid nivel value: {}", label),
        )
    })
}

/// Parses the level of a LEFT JOINed latest diagnosis.
pub(crate) fn parse_optional_level(label: Option<String>) -> Option<Classification> {
    let label = label?;
    let level = Classification::from_label(&label);
    if level.is_none() {
        tracing::warn!(nivel = %label, "ignoring unknown stored level");
    }
    level
}

/// Name of the violated unique / foreign key constraint, if any.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}
