//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - Accounts, members, action plans
//! - `PostgresDiagnosisRepository` - Diagnosis records
//! - `PostgresReadModels` - Family, population and questionnaire reads
//! - `PostgresReflectionRepository` - Reflection sets
//! - `PostgresInstitutionRepository` / `PostgresProfessionalRepository` - Directory

mod diagnosis_repository;
mod directory_repository;
mod readers;
mod reflection_repository;
mod rows;
mod user_repository;

pub use diagnosis_repository::PostgresDiagnosisRepository;
pub use directory_repository::{PostgresInstitutionRepository, PostgresProfessionalRepository};
pub use readers::PostgresReadModels;
pub use reflection_repository::PostgresReflectionRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::migrate::Migrator;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
