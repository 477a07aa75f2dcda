//! PostgreSQL read models: family panorama, population overview and the
//! questionnaire.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::rows::parse_optional_level;
use crate::domain::assessment::{group_questions, AnswerOption, Question, QuestionOptionRow};
use crate::domain::family::FamilyMember;
use crate::domain::foundation::{DomainError, FamilyId, QuestionId, Timestamp, UserId};
use crate::domain::overview::PopulationRow;
use crate::ports::{FamilyReader, PopulationReader, QuestionReader};

/// Latest diagnosis per user, joined laterally.
const LATEST_DIAGNOSIS_JOIN: &str = r#"
    LEFT JOIN LATERAL (
        SELECT pontuacao, nivel, data_diagnostico
        FROM diagnosticos
        WHERE usuario_id = u.id
        ORDER BY data_diagnostico DESC, id DESC
        LIMIT 1
    ) d ON TRUE
"#;

/// PostgreSQL implementation of FamilyReader, PopulationReader and QuestionReader.
#[derive(Clone)]
pub struct PostgresReadModels {
    pool: PgPool,
}

impl PostgresReadModels {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: i64,
    nome: String,
    idade: Option<i32>,
    relacionamento: Option<String>,
    pontuacao: Option<i32>,
    nivel: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct PopulationDbRow {
    id: i64,
    nome: String,
    relacionamento: Option<String>,
    familia_id: Option<i64>,
    pontuacao: Option<i32>,
    nivel: Option<String>,
    data_diagnostico: Option<DateTime<Utc>>,
}

#[derive(Debug, sqlx::FromRow)]
struct QuestionDbRow {
    pergunta_id: i64,
    pergunta_texto: String,
    categoria: Option<String>,
    opcao_id: Option<i64>,
    opcao_texto: Option<String>,
    opcao_pontuacao: Option<i32>,
}

impl From<QuestionDbRow> for QuestionOptionRow {
    fn from(row: QuestionDbRow) -> Self {
        let option = match (row.opcao_id, row.opcao_texto, row.opcao_pontuacao) {
            (Some(id), Some(text), Some(points)) => Some(AnswerOption { id, text, points }),
            _ => None,
        };
        QuestionOptionRow {
            question_id: QuestionId::from_i64(row.pergunta_id),
            question_text: row.pergunta_texto,
            category: row.categoria,
            option,
        }
    }
}

#[async_trait]
impl FamilyReader for PostgresReadModels {
    async fn members_with_latest(&self, family_id: FamilyId) -> Result<Vec<FamilyMember>, DomainError> {
        let rows: Vec<MemberRow> = sqlx::query_as(&format!(
            r#"
            SELECT u.id, u.nome, u.idade, u.relacionamento, d.pontuacao, d.nivel
            FROM usuarios u
            {}
            WHERE u.familia_id = $1
            ORDER BY u.id
            "#,
            LATEST_DIAGNOSIS_JOIN
        ))
        .bind(family_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("load family members", e))?;

        Ok(rows
            .into_iter()
            .map(|row| FamilyMember {
                id: UserId::from_i64(row.id),
                name: row.nome,
                age: row.idade,
                relationship: row.relacionamento,
                latest_score: row.pontuacao,
                latest_classification: parse_optional_level(row.nivel),
            })
            .collect())
    }
}

#[async_trait]
impl PopulationReader for PostgresReadModels {
    async fn all_users_with_latest(&self) -> Result<Vec<PopulationRow>, DomainError> {
        let rows: Vec<PopulationDbRow> = sqlx::query_as(&format!(
            r#"
            SELECT u.id, u.nome, u.relacionamento, u.familia_id,
                   d.pontuacao, d.nivel, d.data_diagnostico
            FROM usuarios u
            {}
            ORDER BY u.familia_id NULLS LAST, u.nome
            "#,
            LATEST_DIAGNOSIS_JOIN
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("load population", e))?;

        tracing::debug!(rows = rows.len(), "population loaded");

        Ok(rows
            .into_iter()
            .map(|row| PopulationRow {
                user_id: UserId::from_i64(row.id),
                name: row.nome,
                relationship: row.relacionamento,
                family_id: row.familia_id.map(FamilyId::from_i64),
                latest_score: row.pontuacao,
                latest_classification: parse_optional_level(row.nivel),
                latest_at: row.data_diagnostico.map(Timestamp::from_datetime),
            })
            .collect())
    }
}

#[async_trait]
impl QuestionReader for PostgresReadModels {
    async fn list_questions(&self) -> Result<Vec<Question>, DomainError> {
        let rows: Vec<QuestionDbRow> = sqlx::query_as(
            r#"
            SELECT p.id AS pergunta_id, p.texto AS pergunta_texto, p.categoria,
                   o.id AS opcao_id, o.texto AS opcao_texto, o.pontuacao AS opcao_pontuacao
            FROM perguntas p
            LEFT JOIN opcoes_resposta o ON o.pergunta_id = p.id
            ORDER BY p.id, o.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("load questions", e))?;

        Ok(group_questions(rows.into_iter().map(QuestionOptionRow::from).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(opcao: Option<(i64, &str, i32)>) -> QuestionDbRow {
        QuestionDbRow {
            pergunta_id: 1,
            pergunta_texto: "Quanto tempo?".to_string(),
            categoria: Some("uso".to_string()),
            opcao_id: opcao.map(|o| o.0),
            opcao_texto: opcao.map(|o| o.1.to_string()),
            opcao_pontuacao: opcao.map(|o| o.2),
        }
    }

    #[test]
    fn left_join_without_option_yields_no_option() {
        let converted = QuestionOptionRow::from(row(None));
        assert!(converted.option.is_none());
        assert_eq!(converted.question_id, QuestionId::from_i64(1));
    }

    #[test]
    fn joined_option_is_carried() {
        let converted = QuestionOptionRow::from(row(Some((4, "Muito", 3))));
        assert_eq!(
            converted.option,
            Some(AnswerOption {
                id: 4,
                text: "Muito".to_string(),
                points: 3
            })
        );
    }
}
