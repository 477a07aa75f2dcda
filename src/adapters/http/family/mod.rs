//! HTTP adapter for families.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::family_routes;
