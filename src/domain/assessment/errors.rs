//! Assessment-specific error types.

use thiserror::Error;

use super::fields::AssessmentField;
use crate::domain::foundation::{AssessmentId, ErrorCode, ValidationError};

/// Failure reported by the persistence collaborator.
///
/// The core never produces these itself; they pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Persistence API unavailable: {0}")]
    Unavailable(String),

    #[error("Persistence API rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Persistence API returned an unreadable record: {0}")]
    MalformedResponse(String),
}

/// Errors raised while normalizing, assembling or retrieving assessments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// Normalization received something other than a JSON object.
    #[error("Assessment data must be an object, got {found}")]
    InvalidShape { found: &'static str },

    /// Assembly attempted before every required field was set.
    #[error("Assessment is incomplete, missing: {}", join_fields(.missing))]
    IncompleteInput { missing: Vec<AssessmentField> },

    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error("Permission denied")]
    Forbidden,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

fn join_fields(fields: &[AssessmentField]) -> String {
    fields
        .iter()
        .map(AssessmentField::wire_name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl AssessmentError {
    pub fn incomplete(missing: Vec<AssessmentField>) -> Self {
        AssessmentError::IncompleteInput { missing }
    }

    /// First unset field, used to route the user back to its step.
    pub fn first_missing(&self) -> Option<AssessmentField> {
        match self {
            AssessmentError::IncompleteInput { missing } => missing.first().copied(),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::InvalidShape { .. } => ErrorCode::InvalidShape,
            AssessmentError::IncompleteInput { .. } => ErrorCode::IncompleteInput,
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::Forbidden => ErrorCode::Forbidden,
            AssessmentError::Validation(_) => ErrorCode::ValidationFailed,
            AssessmentError::Persistence(_) => ErrorCode::PersistenceError,
        }
    }
}
