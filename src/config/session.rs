//! Wizard session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Lifetime of partial wizard state
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Seconds an untouched wizard entry survives
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ttl_secs == 0 || self.ttl_secs > MAX_TTL_SECS {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
        }
    }
}

const MAX_TTL_SECS: u64 = 7 * 24 * 60 * 60;

fn default_ttl() -> u64 {
    60 * 60
}
