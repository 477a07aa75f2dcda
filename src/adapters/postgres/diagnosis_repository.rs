//! PostgreSQL implementation of DiagnosisRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;

use super::rows::{parse_level, violated_constraint};
use crate::domain::assessment::{Diagnosis, DiagnosisSnapshot, NewDiagnosis};
use crate::domain::foundation::{DiagnosisId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::DiagnosisRepository;

#[derive(Clone)]
pub struct PostgresDiagnosisRepository {
    pool: PgPool,
}

impl PostgresDiagnosisRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DiagnosisRow {
    id: i64,
    usuario_id: i64,
    pontuacao: i32,
    nivel: String,
    respostas: Value,
    data_diagnostico: DateTime<Utc>,
}

impl TryFrom<DiagnosisRow> for Diagnosis {
    type Error = DomainError;

    fn try_from(row: DiagnosisRow) -> Result<Self, Self::Error> {
        Ok(Diagnosis {
            id: DiagnosisId::from_i64(row.id),
            user_id: UserId::from_i64(row.usuario_id),
            score: row.pontuacao,
            classification: parse_level(&row.nivel)?,
            raw_answers: row.respostas,
            diagnosed_at: Timestamp::from_datetime(row.data_diagnostico),
        })
    }
}

#[async_trait]
impl DiagnosisRepository for PostgresDiagnosisRepository {
    async fn save(&self, diagnosis: &NewDiagnosis, at: Timestamp) -> Result<Diagnosis, DomainError> {
        let row: DiagnosisRow = sqlx::query_as(
            r#"
            INSERT INTO diagnosticos (usuario_id, pontuacao, nivel, respostas, data_diagnostico)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, usuario_id, pontuacao, nivel, respostas, data_diagnostico
            "#,
        )
        .bind(diagnosis.user_id().as_i64())
        .bind(diagnosis.score())
        .bind(diagnosis.classification().label())
        .bind(diagnosis.raw_answers())
        .bind(at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violated_constraint(&e) == Some("diagnosticos_usuario_id_fkey") {
                return DomainError::new(
                    ErrorCode::UserNotFound,
                    format!("User {} not found", diagnosis.user_id()),
                );
            }
            DomainError::database("insert diagnosis", e)
        })?;

        row.try_into()
    }

    async fn latest_for_user(&self, user_id: UserId) -> Result<Option<Diagnosis>, DomainError> {
        let row: Option<DiagnosisRow> = sqlx::query_as(
            r#"
            SELECT id, usuario_id, pontuacao, nivel, respostas, data_diagnostico
            FROM diagnosticos
            WHERE usuario_id = $1
            ORDER BY data_diagnostico DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("load latest diagnosis", e))?;

        row.map(Diagnosis::try_from).transpose()
    }

    async fn history_for_user(&self, user_id: UserId) -> Result<Vec<DiagnosisSnapshot>, DomainError> {
        let rows: Vec<(i32, String, DateTime<Utc>)> = sqlx::query_as(
            r#"
            SELECT pontuacao, nivel, data_diagnostico
            FROM diagnosticos
            WHERE usuario_id = $1
            ORDER BY data_diagnostico ASC, id ASC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("load diagnosis history", e))?;

        rows.into_iter()
            .map(|(score, nivel, at)| {
                Ok(DiagnosisSnapshot {
                    score,
                    classification: parse_level(&nivel)?,
                    diagnosed_at: Timestamp::from_datetime(at),
                })
            })
            .collect()
    }
}
