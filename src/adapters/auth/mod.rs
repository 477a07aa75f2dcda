//! Session token adapters.

mod jwt;

pub use jwt::{JwtSessions, ISSUER};
