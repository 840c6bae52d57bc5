//! Error types shared across the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value construction or step validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' does not accept '{value}' (allowed: {})", .allowed.join(", "))]
    NotInSet {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an error for a value outside a step's enumerated set.
    pub fn not_in_set(field: impl Into<String>, value: impl Into<String>, allowed: &[&str]) -> Self {
        ValidationError::NotInSet {
            field: field.into(),
            value: value.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotInSet { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidShape,
    IncompleteInput,

    // Not found errors
    AssessmentNotFound,

    // State errors
    WizardComplete,
    WizardNotFinished,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // Infrastructure errors
    PersistenceError,
    SessionStoreError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidShape => "INVALID_SHAPE",
            ErrorCode::IncompleteInput => "INCOMPLETE_INPUT",
            ErrorCode::AssessmentNotFound => "ASSESSMENT_NOT_FOUND",
            ErrorCode::WizardComplete => "WIZARD_COMPLETE",
            ErrorCode::WizardNotFinished => "WIZARD_NOT_FINISHED",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::PersistenceError => "PERSISTENCE_ERROR",
            ErrorCode::SessionStoreError => "SESSION_STORE_ERROR",
        };
        write!(f, "{}", s)
    }
}
