//! CompleteAssessmentHandler - turns a finished wizard into a stored assessment.
//!
//! This is the single place that calls `AssessmentRepository::create`:
//! exactly one call per completed run, no retries. A run only completes
//! from `Results`; missing fields are reported ahead of the step check so
//! the caller can route back to the first unset step.

use std::sync::Arc;

use super::errors::WizardFlowError;
use super::wizard_store;
use crate::domain::assessment::{
    assemble, flatten, normalize, Assessment, AssessmentError, Classifier,
};
use crate::domain::foundation::{UserId, WizardSessionId};
use crate::domain::wizard::WizardError;
use crate::ports::{AssessmentRepository, SessionStore};

/// Command to complete a wizard run for the signed-in user.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentCommand {
    pub session_id: WizardSessionId,
    pub user_id: UserId,
}

pub struct CompleteAssessmentHandler {
    store: Arc<dyn SessionStore>,
    repository: Arc<dyn AssessmentRepository>,
    classifier: Arc<Classifier>,
}

impl CompleteAssessmentHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        repository: Arc<dyn AssessmentRepository>,
        classifier: Arc<Classifier>,
    ) -> Self {
        Self {
            store,
            repository,
            classifier,
        }
    }

    pub async fn handle(&self, cmd: CompleteAssessmentCommand) -> Result<Assessment, WizardFlowError> {
        // 1. Reconstruct the collected input
        let state = wizard_store::load_or_start(self.store.as_ref(), cmd.session_id, None).await?;

        // 2. Re-normalize in case the stored input predates the canonical shape
        let input = normalize(&flatten(state.input()))?;

        // 3. Required fields first, then the run itself must be finished
        let missing = input.missing_required();
        if !missing.is_empty() {
            let e = AssessmentError::incomplete(missing);
            tracing::warn!(session_id = %cmd.session_id, error = %e, "Completion attempted early");
            return Err(e.into());
        }
        if !state.is_complete() {
            tracing::warn!(
                session_id = %cmd.session_id,
                step = state.step().slug(),
                "Completion attempted before results"
            );
            return Err(WizardError::NotFinished { step: state.step() }.into());
        }

        // 4. Classify and recommend
        let record = assemble(input, cmd.user_id, &self.classifier)?;
        let pattern = record.pattern;

        // 5. Hand to persistence; failures pass through unchanged
        let saved = self
            .repository
            .create(record)
            .await
            .map_err(AssessmentError::from)?;

        // 6. The run is over
        wizard_store::clear(self.store.as_ref(), cmd.session_id).await?;

        tracing::info!(
            assessment_id = %saved.id(),
            session_id = %cmd.session_id,
            pattern = %pattern,
            "Assessment completed"
        );
        Ok(saved)
    }
}
