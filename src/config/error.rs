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

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid persistence API URL format")]
    InvalidPersistenceUrl,

    #[error("Persistence API must use HTTPS in production")]
    PersistenceMustBeHttps,

    #[error("Session TTL must be between 1 second and 7 days")]
    InvalidSessionTtl,

    #[error("Boundary table file not found: {0}")]
    BoundaryTableNotFound(String),
}
