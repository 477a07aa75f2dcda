//! HTTP adapter for the dashboard and the general evaluation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::dashboard_routes;
