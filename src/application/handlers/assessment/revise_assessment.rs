//! ReviseAssessmentHandler - seeds a new wizard from a stored assessment.
//!
//! The stored record is never modified. Its observations go back through
//! the normalizer and prefill a fresh session at the first step; completing
//! that session stores a new assessment.

use std::sync::Arc;

use super::get_assessment::load_owned;
use crate::application::handlers::wizard::{wizard_store, WizardFlowError};
use crate::domain::assessment::{flatten, normalize};
use crate::domain::foundation::{AssessmentId, UserId, WizardSessionId};
use crate::domain::wizard::WizardState;
use crate::ports::{AssessmentRepository, SessionStore};

#[derive(Debug, Clone)]
pub struct ReviseAssessmentCommand {
    pub user_id: UserId,
    pub assessment_id: AssessmentId,
    pub quick_response: bool,
}

pub struct ReviseAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    store: Arc<dyn SessionStore>,
}

impl ReviseAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>, store: Arc<dyn SessionStore>) -> Self {
        Self { repository, store }
    }

    pub async fn handle(&self, cmd: ReviseAssessmentCommand) -> Result<WizardState, WizardFlowError> {
        // 1. Load and authorize
        let assessment =
            load_owned(self.repository.as_ref(), &cmd.user_id, cmd.assessment_id).await?;

        // 2. Normalize the stored observations
        let input = normalize(&flatten(&assessment.record().input()))?;

        // 3. Seed a new session
        let state = WizardState::prefilled(WizardSessionId::new(), input, cmd.quick_response);
        wizard_store::save(self.store.as_ref(), &state).await?;

        tracing::info!(
            assessment_id = %cmd.assessment_id,
            session_id = %state.session_id(),
            "Revision wizard started"
        );
        Ok(state)
    }
}
