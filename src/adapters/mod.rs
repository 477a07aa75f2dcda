//! Adapters - Implementations of ports for external systems.
//!
//! - `postgres` - sqlx-backed stores
//! - `memory` - In-process store for tests and the `memory://` backend
//! - `auth` - JWT session tokens
//! - `http` - axum routers, DTOs and middleware

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
