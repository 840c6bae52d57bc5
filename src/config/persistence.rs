//! Persistence collaborator configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Where finished assessments are stored
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: PersistenceBackend,

    /// Base URL of the persistence API (http backend)
    pub base_url: Option<String>,

    /// Bearer token for the persistence API (http backend)
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Persistence backend type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    #[default]
    Memory,
    Http,
}

impl PersistenceConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate persistence configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.backend == PersistenceBackend::Memory {
            return Ok(());
        }

        let url = self
            .base_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ValidationError::MissingRequired("PERSISTENCE__BASE_URL"))?;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidPersistenceUrl);
        }
        if *environment == Environment::Production && !url.starts_with("https://") {
            return Err(ValidationError::PersistenceMustBeHttps);
        }
        if self.api_token.as_deref().map_or(true, str::is_empty) {
            return Err(ValidationError::MissingRequired("PERSISTENCE__API_TOKEN"));
        }
        Ok(())
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: PersistenceBackend::default(),
            base_url: None,
            api_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
