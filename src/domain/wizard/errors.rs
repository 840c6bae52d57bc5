//! Wizard-specific error types.

use thiserror::Error;

use super::WizardStep;
use crate::domain::foundation::{ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The submitted value is outside the step's enumerated set.
    #[error("Invalid value at step '{}': {source}", .step.slug())]
    Validation {
        step: WizardStep,
        #[source]
        source: ValidationError,
    },

    /// Submission attempted after reaching `Results`.
    #[error("Wizard is already complete")]
    AlreadyComplete,

    /// Completion attempted before the run reached `Results`.
    #[error("Wizard is not finished, still at step '{}'", .step.slug())]
    NotFinished { step: WizardStep },
}

impl WizardError {
    pub fn validation(step: WizardStep, source: ValidationError) -> Self {
        WizardError::Validation { step, source }
    }

    /// Name of the offending field, for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            WizardError::Validation { source, .. } => Some(source.field()),
            WizardError::AlreadyComplete | WizardError::NotFinished { .. } => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::Validation { .. } => ErrorCode::ValidationFailed,
            WizardError::AlreadyComplete => ErrorCode::WizardComplete,
            WizardError::NotFinished { .. } => ErrorCode::WizardNotFinished,
        }
    }
}
