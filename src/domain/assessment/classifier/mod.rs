//! Classification engine.
//!
//! Maps an [`AssessmentInput`] to exactly one [`Pattern`] by walking an
//! ordered decision list (see [`rules`]). Pure, deterministic and total:
//! the final rule always matches, and unrecognized field values are
//! neutral because they appear in no boundary list.
//!
//! ```ignore
//! let classifier = Classifier::default();
//! let pattern = classifier.classify(&input);
//! ```

mod boundaries;
mod rules;

pub use boundaries::{BoundaryTable, BoundaryTableError, DevelopingSignals};
pub use rules::{default_rules, Rule, RulePredicate};

use super::{AssessmentInput, Pattern};

/// Boundary table plus the ordered rule list evaluated against it.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: BoundaryTable,
    rules: Vec<Rule>,
}

impl Classifier {
    /// Creates a classifier with the default rule order over `table`.
    pub fn new(table: BoundaryTable) -> Self {
        Self {
            table,
            rules: default_rules(),
        }
    }

    pub fn table(&self) -> &BoundaryTable {
        &self.table
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the first matching rule.
    pub fn matching_rule(&self, input: &AssessmentInput) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(&self.table, input))
    }

    /// Classifies an input. Falls back to `Regular` if no rule matches.
    pub fn classify(&self, input: &AssessmentInput) -> Pattern {
        match self.matching_rule(input) {
            Some(rule) => {
                tracing::debug!(pattern = %rule.pattern, rule = rule.name, "Assessment classified");
                rule.pattern
            }
            None => Pattern::Regular,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(BoundaryTable::default())
    }
}

/// Classifies with the default boundary table.
pub fn classify(input: &AssessmentInput) -> Pattern {
    Classifier::default().classify(input)
}
