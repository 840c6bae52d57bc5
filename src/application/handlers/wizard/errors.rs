//! Errors raised by wizard and revision handlers.

use thiserror::Error;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::ErrorCode;
use crate::domain::wizard::{WizardError, WizardStep};
use crate::ports::SessionStoreError;

/// Anything that can stop a wizard request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardFlowError {
    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error("Session store failure: {0}")]
    Store(#[from] SessionStoreError),
}

impl WizardFlowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardFlowError::Wizard(e) => e.code(),
            WizardFlowError::Assessment(e) => e.code(),
            WizardFlowError::Store(_) => ErrorCode::SessionStoreError,
        }
    }

    /// Step the user should be sent back to after an incomplete completion.
    pub fn first_unset_step(&self) -> Option<WizardStep> {
        match self {
            WizardFlowError::Assessment(e) => e.first_missing().map(WizardStep::for_field),
            _ => None,
        }
    }
}
