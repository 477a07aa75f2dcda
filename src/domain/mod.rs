//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Questionnaire, scoring, classification and recommendations
//! - `family` - Family members and the family panorama
//! - `overview` - Population-wide statistics
//! - `dashboard` - Per-user dashboard composition
//! - `account` - Registration, credentials and user records
//! - `directory` - Partner institutions and professionals
//! - `reflection` - Free-text reflections

pub mod account;
pub mod assessment;
pub mod dashboard;
pub mod directory;
pub mod family;
pub mod foundation;
pub mod overview;
pub mod reflection;
