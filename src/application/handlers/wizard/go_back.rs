//! GoBackHandler - moves the wizard one step back.

use std::sync::Arc;

use super::errors::WizardFlowError;
use super::wizard_store;
use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::WizardState;
use crate::ports::SessionStore;

#[derive(Debug, Clone)]
pub struct GoBackCommand {
    pub session_id: WizardSessionId,
    pub quick_response: Option<bool>,
}

pub struct GoBackHandler {
    store: Arc<dyn SessionStore>,
}

impl GoBackHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: GoBackCommand) -> Result<WizardState, WizardFlowError> {
        let current =
            wizard_store::load_or_start(self.store.as_ref(), cmd.session_id, cmd.quick_response)
                .await?;
        let previous = current.back();
        wizard_store::save(self.store.as_ref(), &previous).await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            from = current.step().slug(),
            to = previous.step().slug(),
            "Wizard moved back"
        );
        Ok(previous)
    }
}
