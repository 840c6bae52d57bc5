//! Session Store Port - browsing-session scoped key/value storage.
//!
//! Holds partial wizard state between requests. Entries are ephemeral:
//! abandoning a session simply leaves a stale entry to be overwritten.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

/// Errors that can occur during session store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize session entry: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session entry '{key}': {reason}")]
    DeserializationFailed { key: String, reason: String },

    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for the session-scoped store.
///
/// Callers assume single-writer access per key; implementations do not lock
/// across `get` and `set`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the value under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<JsonValue>, SessionStoreError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: JsonValue) -> Result<(), SessionStoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }

    #[test]
    fn deserialization_error_names_key() {
        let err = SessionStoreError::DeserializationFailed {
            key: "wizard:abc".to_string(),
            reason: "missing field `step`".to_string(),
        };
        assert!(err.to_string().contains("wizard:abc"));
    }
}
