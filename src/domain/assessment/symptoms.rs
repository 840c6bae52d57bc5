//! Insertion-ordered symptom set.

use serde::{Deserialize, Deserializer, Serialize};

/// A set of symptom names.
///
/// Duplicates are dropped on insert. Iteration follows first-recorded order,
/// which symptom-triggered recommendations rely on; equality ignores order.
#[derive(Debug, Clone, Default, Eq, Serialize)]
#[serde(transparent)]
pub struct SymptomSet(Vec<String>);

impl SymptomSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts a symptom, returning false if it was already present.
    pub fn insert(&mut self, symptom: impl Into<String>) -> bool {
        let symptom = symptom.into();
        if self.0.contains(&symptom) {
            return false;
        }
        self.0.push(symptom);
        true
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.0.iter().any(|s| s == symptom)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl PartialEq for SymptomSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|s| other.contains(s))
    }
}

impl<S: Into<String>> FromIterator<S> for SymptomSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SymptomSet::new();
        for symptom in iter {
            set.insert(symptom);
        }
        set
    }
}

impl<'de> Deserialize<'de> for SymptomSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<String>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
