//! PostgreSQL implementation of ReflectionRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::rows::violated_constraint;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::reflection::{Reflection, ReflectionSet};
use crate::ports::ReflectionRepository;

#[derive(Clone)]
pub struct PostgresReflectionRepository {
    pool: PgPool,
}

impl PostgresReflectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReflectionRepository for PostgresReflectionRepository {
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Reflection>, DomainError> {
        let rows: Vec<(String, String, DateTime<Utc>)> = sqlx::query_as(
            r#"
            SELECT pergunta, resposta, data_criacao
            FROM reflexoes
            WHERE usuario_id = $1
            ORDER BY data_criacao DESC, id DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("load reflections", e))?;

        Ok(rows
            .into_iter()
            .map(|(prompt, answer, created_at)| Reflection {
                user_id,
                prompt,
                answer,
                created_at: Timestamp::from_datetime(created_at),
            })
            .collect())
    }

    async fn replace_all(
        &self,
        user_id: UserId,
        set: &ReflectionSet,
        at: Timestamp,
    ) -> Result<usize, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        sqlx::query("DELETE FROM reflexoes WHERE usuario_id = $1")
            .bind(user_id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("clear reflections", e))?;

        for (prompt, answer) in set.entries() {
            sqlx::query(
                r#"
                INSERT INTO reflexoes (usuario_id, pergunta, resposta, data_criacao)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(user_id.as_i64())
            .bind(prompt)
            .bind(answer)
            .bind(at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if violated_constraint(&e) == Some("reflexoes_usuario_id_fkey") {
                    return DomainError::new(
                        ErrorCode::UserNotFound,
                        format!("User {} not found", user_id),
                    );
                }
                DomainError::database("insert reflection", e)
            })?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit reflections", e))?;

        tracing::debug!(%user_id, stored = set.len(), "reflections written");
        Ok(set.len())
    }
}
