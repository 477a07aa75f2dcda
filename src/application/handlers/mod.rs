//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! handler holds its ports as `Arc<dyn Port>` and exposes a single
//! `handle` method.

pub mod account;
pub mod assessment;
pub mod dashboard;
pub mod directory;
pub mod family;
pub mod reflection;
