//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid log format '{0}' (expected 'pretty' or 'json')")]
    InvalidLogFormat(String),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("The in-memory store cannot be used in production")]
    MemoryStoreInProduction,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Session secret must be at least {0} characters")]
    SecretTooShort(usize),

    #[error("Session TTL must be between 1 and 8760 hours")]
    InvalidSessionTtl,

    #[error("not_dependent_max ({not_dependent_max}) must be below moderate_max ({moderate_max})")]
    InvalidThresholds {
        not_dependent_max: i32,
        moderate_max: i32,
    },

    #[error("Reevaluation window must be at least one day")]
    InvalidReevaluationWindow,
}
