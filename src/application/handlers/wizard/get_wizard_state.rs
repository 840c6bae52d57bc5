//! GetWizardStateHandler - Query handler reconstructing a wizard on entry.

use std::sync::Arc;

use super::errors::WizardFlowError;
use super::wizard_store;
use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::WizardState;
use crate::ports::SessionStore;

/// Query for the current wizard state. Never writes to the store.
#[derive(Debug, Clone)]
pub struct GetWizardStateQuery {
    pub session_id: WizardSessionId,
    pub quick_response: Option<bool>,
}

pub struct GetWizardStateHandler {
    store: Arc<dyn SessionStore>,
}

impl GetWizardStateHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetWizardStateQuery) -> Result<WizardState, WizardFlowError> {
        Ok(
            wizard_store::load_or_start(self.store.as_ref(), query.session_id, query.quick_response)
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::wizard::{StepValue, WizardStep};

    #[tokio::test]
    async fn returns_stored_state() {
        let store = Arc::new(InMemorySessionStore::new());
        let id = WizardSessionId::new();
        let state = WizardState::new(id, true)
            .submit(StepValue::choice("25-plus"))
            .unwrap();
        wizard_store::save(store.as_ref(), &state).await.unwrap();

        let handler = GetWizardStateHandler::new(store);
        let loaded = handler
            .handle(GetWizardStateQuery {
                session_id: id,
                quick_response: None,
            })
            .await
            .unwrap();

        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn absent_session_is_fresh_and_not_written() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetWizardStateHandler::new(store.clone());

        let state = handler
            .handle(GetWizardStateQuery {
                session_id: WizardSessionId::new(),
                quick_response: None,
            })
            .await
            .unwrap();

        assert_eq!(state.step(), WizardStep::AgeVerification);
        assert!(store.is_empty().await);
    }
}
