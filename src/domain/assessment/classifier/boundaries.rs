//! Bracket-to-pattern boundary table.
//!
//! Which bracket values count as "severe pain", "long duration", "irregular
//! cycle" and so on is configuration, not code. The defaults follow the
//! ACOG typical ranges (21-35 day cycle, 4-7 day bleed, light-to-moderate
//! flow, mild-or-lower pain). A deployment can replace them with a YAML file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading a boundary table from disk.
#[derive(Debug, Error)]
pub enum BoundaryTableError {
    #[error("Failed to read boundary table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse boundary table: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Values that hint at a still-stabilizing adolescent cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopingSignals {
    pub cycle_lengths: Vec<String>,
    pub durations: Vec<String>,
    pub pain_levels: Vec<String>,
    pub flow_levels: Vec<String>,
}

impl Default for DevelopingSignals {
    fn default() -> Self {
        Self {
            cycle_lengths: strings(&["not-sure"]),
            durations: strings(&["1-3", "8-plus"]),
            pain_levels: strings(&["moderate"]),
            flow_levels: Vec::new(),
        }
    }
}

/// The lists each classification rule matches against.
///
/// Any key omitted from a YAML file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryTable {
    pub severe_pain_levels: Vec<String>,
    pub moderate_pain_levels: Vec<String>,
    /// Physical symptoms that turn moderate pain into the pain pattern.
    pub pain_symptoms: Vec<String>,
    pub heavy_flow_levels: Vec<String>,
    pub long_durations: Vec<String>,
    /// Flow levels that, combined with a long duration, mean heavy.
    pub prolonged_flow_levels: Vec<String>,
    pub irregular_cycle_lengths: Vec<String>,
    pub adolescent_ages: Vec<String>,
    pub developing_signals: DevelopingSignals,
}

impl Default for BoundaryTable {
    fn default() -> Self {
        Self {
            severe_pain_levels: strings(&["severe"]),
            moderate_pain_levels: strings(&["moderate"]),
            pain_symptoms: strings(&["Cramps", "Back pain", "Headache"]),
            heavy_flow_levels: strings(&["heavy"]),
            long_durations: strings(&["8-plus"]),
            prolonged_flow_levels: strings(&["heavy"]),
            irregular_cycle_lengths: strings(&["irregular", "less-than-21", "more-than-35"]),
            adolescent_ages: strings(&["under-13", "13-17"]),
            developing_signals: DevelopingSignals::default(),
        }
    }
}

impl BoundaryTable {
    /// Parses a table from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, BoundaryTableError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a table from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, BoundaryTableError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| BoundaryTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }
}

/// True when `value` is set and listed. Unset or unlisted values never match.
pub(crate) fn listed(list: &[String], value: Option<&str>) -> bool {
    value.map_or(false, |v| list.iter().any(|item| item == v))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
