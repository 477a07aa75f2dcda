//! HTTP adapter for the questionnaire and diagnoses.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::assessment_routes;
