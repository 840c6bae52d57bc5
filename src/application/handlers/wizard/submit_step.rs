//! SubmitStepHandler - validates and records one step, then advances.

use std::sync::Arc;

use super::errors::WizardFlowError;
use super::wizard_store;
use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::{StepValue, WizardState};
use crate::ports::SessionStore;

/// Command to submit a value for the wizard's current step.
#[derive(Debug, Clone)]
pub struct SubmitStepCommand {
    pub session_id: WizardSessionId,
    pub value: StepValue,
    pub quick_response: Option<bool>,
}

/// Handler for step submissions.
pub struct SubmitStepHandler {
    store: Arc<dyn SessionStore>,
}

impl SubmitStepHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SubmitStepCommand) -> Result<WizardState, WizardFlowError> {
        // 1. Reconstruct current state
        let current =
            wizard_store::load_or_start(self.store.as_ref(), cmd.session_id, cmd.quick_response)
                .await?;

        // 2. Pure transition; a rejected value leaves the stored state alone
        let next = current.submit(cmd.value).map_err(|e| {
            tracing::warn!(
                session_id = %cmd.session_id,
                step = current.step().slug(),
                error = %e,
                "Step submission rejected"
            );
            e
        })?;

        // 3. Write through before answering
        wizard_store::save(self.store.as_ref(), &next).await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            from = current.step().slug(),
            to = next.step().slug(),
            "Wizard advanced"
        );
        Ok(next)
    }
}
