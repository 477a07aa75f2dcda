//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;

use super::rows::{violated_constraint, UserRow, USER_COLUMNS};
use crate::domain::account::{Family, NewAccount, PasswordDigest, User, UserCredentials};
use crate::domain::family::NewFamilyMember;
use crate::domain::foundation::{DomainError, ErrorCode, FamilyId, Timestamp, UserId};
use crate::ports::UserRepository;

/// PostgreSQL implementation of the UserRepository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CredentialsRow {
    #[sqlx(flatten)]
    user: UserRow,
    senha: Option<String>,
}

fn user_not_found(id: UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, format!("User {} not found", id))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_account(&self, account: &NewAccount) -> Result<(User, Family), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        let (family_id, family_created): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO familias (nome, codigo_familia)
            VALUES ($1, $2)
            RETURNING id, data_criacao
            "#,
        )
        .bind(&account.family.name)
        .bind(&account.family.code)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("insert family", e))?;

        let row: UserRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO usuarios (nome, email, idade, familia_id, senha)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(&account.name)
        .bind(&account.email)
        .bind(account.age)
        .bind(family_id)
        .bind(account.digest.encode())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if violated_constraint(&e) == Some("usuarios_email_key") {
                return DomainError::new(ErrorCode::Conflict, "Email already registered");
            }
            DomainError::database("insert user", e)
        })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit registration", e))?;

        let family = Family {
            id: FamilyId::from_i64(family_id),
            name: account.family.name.clone(),
            code: account.family.code.clone(),
            created_at: Timestamp::from_datetime(family_created),
        };
        Ok((row.into(), family))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM usuarios WHERE id = $1", USER_COLUMNS))
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("load user", e))?;
        Ok(row.map(User::from))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let row: Option<CredentialsRow> = sqlx::query_as(&format!(
            "SELECT {}, senha FROM usuarios WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("load credentials", e))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let digest = match row.senha.as_deref().and_then(PasswordDigest::parse) {
            Some(digest) => digest,
            None => {
                tracing::warn!(user_id = row.user.id, "stored password hash is missing or not a PHC string");
                return Ok(None);
            }
        };
        Ok(Some(UserCredentials {
            user: row.user.into(),
            digest,
        }))
    }

    async fn add_family_member(&self, member: &NewFamilyMember) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO usuarios (nome, idade, familia_id, relacionamento)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(&member.name)
        .bind(member.age)
        .bind(member.family_id.as_i64())
        .bind(&member.relationship)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violated_constraint(&e) == Some("usuarios_familia_id_fkey") {
                return DomainError::new(
                    ErrorCode::FamilyNotFound,
                    format!("Family {} not found", member.family_id),
                );
            }
            DomainError::database("insert family member", e)
        })?;
        Ok(row.into())
    }

    async fn delete_with_history(&self, id: UserId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        sqlx::query("DELETE FROM diagnosticos WHERE usuario_id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("delete diagnoses", e))?;

        sqlx::query("DELETE FROM reflexoes WHERE usuario_id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("delete reflections", e))?;

        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("delete user", e))?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(user_not_found(id));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit user deletion", e))
    }

    async fn load_action_plan(&self, id: UserId) -> Result<Option<Value>, DomainError> {
        let row: Option<(Option<Value>,)> =
            sqlx::query_as("SELECT plano_acao FROM usuarios WHERE id = $1")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("load action plan", e))?;

        row.map(|(plan,)| plan).ok_or_else(|| user_not_found(id))
    }

    async fn save_action_plan(&self, id: UserId, plan: &Value) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE usuarios SET plano_acao = $2 WHERE id = $1")
            .bind(id.as_i64())
            .bind(plan)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("save action plan", e))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }
        Ok(())
    }
}
