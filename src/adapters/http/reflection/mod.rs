//! HTTP adapter for reflections and action plans.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::reflection_routes;
