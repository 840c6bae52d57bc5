//! In-Memory Session Store Adapter
//!
//! Keeps session-scoped entries in a process-local map. Every entry carries
//! the time it was last written; once it is older than the store's TTL it
//! reads as absent. Expired entries are dropped on read, and every write
//! sweeps the whole map so abandoned sessions do not accumulate.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::{SessionStore, SessionStoreError};

const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
struct Entry {
    value: JsonValue,
    written_at: Timestamp,
}

impl Entry {
    fn is_expired(&self, now: &Timestamp, ttl: Duration) -> bool {
        now.elapsed_since(&self.written_at) >= ttl
    }
}

/// In-memory session store with per-entry expiry
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    /// Store whose entries expire after one hour without a write.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Clear all entries (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Drop every expired entry, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Timestamp::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(&now, self.ttl));
        before - entries.len()
    }

    /// Number of stored entries, expired ones included until swept
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<JsonValue>, SessionStoreError> {
        let now = Timestamp::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired(&now, self.ttl) => {
                    return Ok(Some(entry.value.clone()))
                }
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().await;
        if entries
            .get(key)
            .map_or(false, |entry| entry.is_expired(&now, self.ttl))
        {
            entries.remove(key);
            tracing::debug!(key, "Expired session entry dropped");
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: JsonValue) -> Result<(), SessionStoreError> {
        let now = Timestamp::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.is_expired(&now, self.ttl));
        entries.insert(
            key.to_string(),
            Entry {
                value,
                written_at: now,
            },
        );
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
