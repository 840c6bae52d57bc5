//! Classifier configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;
use crate::domain::assessment::{BoundaryTable, BoundaryTableError};

/// Bracket-to-pattern boundary table source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifierConfig {
    /// YAML boundary table; the built-in table is used when unset
    pub boundaries_path: Option<PathBuf>,
}

impl ClassifierConfig {
    /// Load the configured boundary table, or the built-in one.
    pub fn boundary_table(&self) -> Result<BoundaryTable, BoundaryTableError> {
        match &self.boundaries_path {
            Some(path) => BoundaryTable::from_yaml_file(path),
            None => Ok(BoundaryTable::default()),
        }
    }

    /// Validate classifier configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.boundaries_path.as_deref() {
            Some(path) if !Path::new(path).is_file() => Err(
                ValidationError::BoundaryTableNotFound(path.display().to_string()),
            ),
            _ => Ok(()),
        }
    }
}
