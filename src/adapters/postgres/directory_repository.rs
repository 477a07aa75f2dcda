//! PostgreSQL implementations of InstitutionRepository and
//! ProfessionalRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::rows::violated_constraint;
use crate::domain::directory::{Institution, NewInstitution, NewProfessional, Professional};
use crate::domain::foundation::{
    DomainError, ErrorCode, InstitutionId, ProfessionalId, Timestamp,
};
use crate::ports::{InstitutionRepository, ProfessionalRepository};

const INSTITUTION_COLUMNS: &str =
    "id, nome, tipo, endereco, telefone, email, descricao, especialidades, data_criacao";

const PROFESSIONAL_COLUMNS: &str = "id, nome, profissao, especialidade, telefone, email, \
     instituicao_id, registro_profissional, abordagem, descricao, data_cadastro";

#[derive(Clone)]
pub struct PostgresInstitutionRepository {
    pool: PgPool,
}

impl PostgresInstitutionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresProfessionalRepository {
    pool: PgPool,
}

impl PostgresProfessionalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct InstitutionRow {
    id: i64,
    nome: String,
    tipo: String,
    endereco: Option<String>,
    telefone: Option<String>,
    email: Option<String>,
    descricao: Option<String>,
    especialidades: Option<String>,
    data_criacao: DateTime<Utc>,
}

impl From<InstitutionRow> for Institution {
    fn from(row: InstitutionRow) -> Self {
        Institution {
            id: InstitutionId::from_i64(row.id),
            name: row.nome,
            kind: row.tipo,
            address: row.endereco,
            phone: row.telefone,
            email: row.email,
            description: row.descricao,
            specialties: row.especialidades,
            created_at: Timestamp::from_datetime(row.data_criacao),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfessionalRow {
    id: i64,
    nome: String,
    profissao: Option<String>,
    especialidade: String,
    telefone: Option<String>,
    email: Option<String>,
    instituicao_id: Option<i64>,
    registro_profissional: String,
    abordagem: String,
    descricao: Option<String>,
    data_cadastro: DateTime<Utc>,
}

impl From<ProfessionalRow> for Professional {
    fn from(row: ProfessionalRow) -> Self {
        Professional {
            id: ProfessionalId::from_i64(row.id),
            name: row.nome,
            profession: row.profissao,
            specialty: row.especialidade,
            phone: row.telefone,
            email: row.email,
            institution_id: row.instituicao_id.map(InstitutionId::from_i64),
            registration_number: row.registro_profissional,
            approach: row.abordagem,
            description: row.descricao,
            registered_at: Timestamp::from_datetime(row.data_cadastro),
        }
    }
}

#[async_trait]
impl InstitutionRepository for PostgresInstitutionRepository {
    async fn list(&self) -> Result<Vec<Institution>, DomainError> {
        let rows: Vec<InstitutionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM instituicoes ORDER BY nome, id",
            INSTITUTION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list institutions", e))?;

        Ok(rows.into_iter().map(Institution::from).collect())
    }

    async fn create(&self, institution: &NewInstitution, at: Timestamp) -> Result<Institution, DomainError> {
        let row: InstitutionRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO instituicoes
                (nome, tipo, endereco, telefone, email, descricao, especialidades, data_criacao)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            INSTITUTION_COLUMNS
        ))
        .bind(&institution.name)
        .bind(&institution.kind)
        .bind(&institution.address)
        .bind(&institution.phone)
        .bind(&institution.email)
        .bind(&institution.description)
        .bind(&institution.specialties)
        .bind(at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert institution", e))?;

        Ok(row.into())
    }

    async fn delete(&self, id: InstitutionId) -> Result<(), DomainError> {
        // Professionals are unlinked by ON DELETE SET NULL.
        let result = sqlx::query("DELETE FROM instituicoes WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete institution", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::InstitutionNotFound,
                format!("Institution {} not found", id),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfessionalRepository for PostgresProfessionalRepository {
    async fn list(&self) -> Result<Vec<Professional>, DomainError> {
        let rows: Vec<ProfessionalRow> = sqlx::query_as(&format!(
            "SELECT {} FROM profissionais ORDER BY nome, id",
            PROFESSIONAL_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list professionals", e))?;

        Ok(rows.into_iter().map(Professional::from).collect())
    }

    async fn email_in_use(&self, email: &str) -> Result<bool, DomainError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM profissionais WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("check professional email", e))?;
        Ok(exists)
    }

    async fn create(&self, professional: &NewProfessional, at: Timestamp) -> Result<Professional, DomainError> {
        let row: ProfessionalRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO profissionais
                (nome, profissao, especialidade, telefone, email, instituicao_id,
                 registro_profissional, abordagem, descricao, data_cadastro)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            PROFESSIONAL_COLUMNS
        ))
        .bind(&professional.name)
        .bind(&professional.profession)
        .bind(&professional.specialty)
        .bind(&professional.phone)
        .bind(&professional.email)
        .bind(professional.institution_id.map(|id| id.as_i64()))
        .bind(&professional.registration_number)
        .bind(&professional.approach)
        .bind(&professional.description)
        .bind(at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e) {
            Some("profissionais_email_key") => {
                DomainError::new(ErrorCode::Conflict, "Professional email already registered")
            }
            Some("profissionais_instituicao_id_fkey") => DomainError::new(
                ErrorCode::ValidationFailed,
                "Institution does not exist",
            )
            .with_detail("field", "instituicao_id"),
            _ => DomainError::database("insert professional", e),
        })?;

        Ok(row.into())
    }

    async fn delete(&self, id: ProfessionalId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM profissionais WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete professional", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProfessionalNotFound,
                format!("Professional {} not found", id),
            ));
        }
        Ok(())
    }
}
