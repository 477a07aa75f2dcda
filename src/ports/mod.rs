//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Write Ports
//!
//! - `UserRepository` - Accounts, family members and action plans
//! - `DiagnosisRepository` - Append-only diagnosis records
//! - `InstitutionRepository` / `ProfessionalRepository` - Partner directory
//! - `ReflectionRepository` - Reflection replace-sets
//!
//! ## Read Ports
//!
//! - `FamilyReader` - Family members with their latest diagnosis
//! - `PopulationReader` - Every user with their latest diagnosis
//! - `QuestionReader` - The questionnaire
//!
//! ## Session Ports
//!
//! - `SessionValidator` / `SessionIssuer` - Session tokens

mod diagnosis_repository;
mod family_reader;
mod institution_repository;
mod population_reader;
mod professional_repository;
mod question_reader;
mod reflection_repository;
mod session_validator;
mod user_repository;

pub use diagnosis_repository::DiagnosisRepository;
pub use family_reader::FamilyReader;
pub use institution_repository::InstitutionRepository;
pub use population_reader::PopulationReader;
pub use professional_repository::ProfessionalRepository;
pub use question_reader::QuestionReader;
pub use reflection_repository::ReflectionRepository;
pub use session_validator::{SessionIssuer, SessionValidator};
pub use user_repository::UserRepository;
