//! Loading and saving `WizardState` through the session store.

use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::WizardState;
use crate::ports::{SessionStore, SessionStoreError};

/// Reads the stored wizard for `session_id`, if any.
pub(crate) async fn load(
    store: &dyn SessionStore,
    session_id: WizardSessionId,
) -> Result<Option<WizardState>, SessionStoreError> {
    let key = session_id.store_key();
    match store.get(&key).await? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| SessionStoreError::DeserializationFailed {
                key,
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

/// Reconstructs the wizard on (re)entry.
///
/// An absent entry yields a fresh wizard at the first step. A `quick_response`
/// flag arriving with the request overrides the stored one.
pub(crate) async fn load_or_start(
    store: &dyn SessionStore,
    session_id: WizardSessionId,
    quick_response: Option<bool>,
) -> Result<WizardState, SessionStoreError> {
    let state = match load(store, session_id).await? {
        Some(state) => state,
        None => {
            tracing::debug!(session_id = %session_id, "No stored wizard, starting fresh");
            WizardState::new(session_id, false)
        }
    };

    Ok(match quick_response {
        Some(quick) => state.with_quick_response(quick),
        None => state,
    })
}

pub(crate) async fn save(store: &dyn SessionStore, state: &WizardState) -> Result<(), SessionStoreError> {
    let value = serde_json::to_value(state)
        .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;
    store.set(&state.session_id().store_key(), value).await
}

pub(crate) async fn clear(store: &dyn SessionStore, session_id: WizardSessionId) -> Result<(), SessionStoreError> {
    store.remove(&session_id.store_key()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use serde_json::json;

    #[tokio::test]
    async fn absent_entry_starts_fresh() {
        let store = InMemorySessionStore::new();
        let id = WizardSessionId::new();

        let state = load_or_start(&store, id, None).await.unwrap();
        assert_eq!(state, WizardState::new(id, false));
    }

    #[tokio::test]
    async fn saved_state_is_reconstructed() {
        let store = InMemorySessionStore::new();
        let state = WizardState::new(WizardSessionId::new(), true);
        save(&store, &state).await.unwrap();

        let loaded = load_or_start(&store, *state.session_id(), None).await.unwrap();
        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn request_flag_overrides_stored_flag() {
        let store = InMemorySessionStore::new();
        let state = WizardState::new(WizardSessionId::new(), false);
        save(&store, &state).await.unwrap();

        let loaded = load_or_start(&store, *state.session_id(), Some(true)).await.unwrap();
        assert!(loaded.quick_response());
    }

    #[tokio::test]
    async fn corrupt_entry_is_a_store_error() {
        let store = InMemorySessionStore::new();
        let id = WizardSessionId::new();
        store.set(&id.store_key(), json!({"step": 3})).await.unwrap();

        let err = load(&store, id).await.unwrap_err();
        assert!(matches!(err, SessionStoreError::DeserializationFailed { .. }));
    }

    #[tokio::test]
    async fn clear_removes_entry() {
        let store = InMemorySessionStore::new();
        let state = WizardState::new(WizardSessionId::new(), false);
        save(&store, &state).await.unwrap();
        clear(&store, *state.session_id()).await.unwrap();
        assert!(store.is_empty().await);
    }
}
