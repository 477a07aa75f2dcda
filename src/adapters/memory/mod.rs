//! In-memory adapters for development and tests.

mod store;

pub use store::InMemoryStore;
