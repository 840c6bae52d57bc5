//! StepValue - what a user submits at a wizard step.

use crate::domain::assessment::SymptomSet;

/// A submission for the current step.
///
/// Single-choice steps take a bracket value; the symptoms step takes all
/// three symptom groups at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepValue {
    Choice(String),
    Symptoms {
        physical: SymptomSet,
        emotional: SymptomSet,
        other: SymptomSet,
    },
}

impl StepValue {
    pub fn choice(value: impl Into<String>) -> Self {
        StepValue::Choice(value.into())
    }

    pub fn symptoms(physical: SymptomSet, emotional: SymptomSet, other: SymptomSet) -> Self {
        StepValue::Symptoms {
            physical,
            emotional,
            other,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            StepValue::Choice(_) => "choice",
            StepValue::Symptoms { .. } => "symptoms",
        }
    }
}
