//! StartWizardHandler - Command handler for opening a new wizard session.

use std::sync::Arc;

use super::errors::WizardFlowError;
use super::wizard_store;
use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::WizardState;
use crate::ports::SessionStore;

/// Command to start a wizard.
#[derive(Debug, Clone, Default)]
pub struct StartWizardCommand {
    pub quick_response: bool,
}

/// Handler for starting wizard sessions.
pub struct StartWizardHandler {
    store: Arc<dyn SessionStore>,
}

impl StartWizardHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: StartWizardCommand) -> Result<WizardState, WizardFlowError> {
        let state = WizardState::new(WizardSessionId::new(), cmd.quick_response);
        wizard_store::save(self.store.as_ref(), &state).await?;

        tracing::debug!(
            session_id = %state.session_id(),
            quick_response = cmd.quick_response,
            "Wizard started"
        );
        Ok(state)
    }
}
