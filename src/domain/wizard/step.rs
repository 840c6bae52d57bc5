//! WizardStep - the seven linear collection steps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::assessment::AssessmentField;
use crate::domain::foundation::{StateMachine, ValidationError};

/// Wizard steps in their fixed order. `Results` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    AgeVerification,
    CycleLength,
    PeriodDuration,
    Flow,
    Pain,
    Symptoms,
    Results,
}

impl WizardStep {
    /// The canonical order of wizard steps.
    pub const ORDER: [WizardStep; 7] = [
        WizardStep::AgeVerification,
        WizardStep::CycleLength,
        WizardStep::PeriodDuration,
        WizardStep::Flow,
        WizardStep::Pain,
        WizardStep::Symptoms,
        WizardStep::Results,
    ];

    pub fn first() -> WizardStep {
        Self::ORDER[0]
    }

    /// Returns the 0-based index of this step.
    pub fn order_index(&self) -> usize {
        match self {
            WizardStep::AgeVerification => 0,
            WizardStep::CycleLength => 1,
            WizardStep::PeriodDuration => 2,
            WizardStep::Flow => 3,
            WizardStep::Pain => 4,
            WizardStep::Symptoms => 5,
            WizardStep::Results => 6,
        }
    }

    /// 1-based step number shown to the user.
    pub fn number(&self) -> usize {
        self.order_index() + 1
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ORDER.get(self.order_index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        let idx = self.order_index();
        if idx == 0 {
            None
        } else {
            Self::ORDER.get(idx - 1).copied()
        }
    }

    /// The single-choice field recorded at this step, if any.
    pub fn field(&self) -> Option<AssessmentField> {
        match self {
            WizardStep::AgeVerification => Some(AssessmentField::Age),
            WizardStep::CycleLength => Some(AssessmentField::CycleLength),
            WizardStep::PeriodDuration => Some(AssessmentField::PeriodDuration),
            WizardStep::Flow => Some(AssessmentField::FlowHeaviness),
            WizardStep::Pain => Some(AssessmentField::PainLevel),
            WizardStep::Symptoms | WizardStep::Results => None,
        }
    }

    /// The step that records `field`.
    pub fn for_field(field: AssessmentField) -> WizardStep {
        match field {
            AssessmentField::Age => WizardStep::AgeVerification,
            AssessmentField::CycleLength => WizardStep::CycleLength,
            AssessmentField::PeriodDuration => WizardStep::PeriodDuration,
            AssessmentField::FlowHeaviness => WizardStep::Flow,
            AssessmentField::PainLevel => WizardStep::Pain,
        }
    }

    /// URL path segment for this step.
    pub fn slug(&self) -> &'static str {
        match self {
            WizardStep::AgeVerification => "age-verification",
            WizardStep::CycleLength => "cycle-length",
            WizardStep::PeriodDuration => "period-duration",
            WizardStep::Flow => "flow",
            WizardStep::Pain => "pain",
            WizardStep::Symptoms => "symptoms",
            WizardStep::Results => "results",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::AgeVerification => "Age Verification",
            WizardStep::CycleLength => "Cycle Length",
            WizardStep::PeriodDuration => "Period Duration",
            WizardStep::Flow => "Flow",
            WizardStep::Pain => "Pain",
            WizardStep::Symptoms => "Symptoms",
            WizardStep::Results => "Results",
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().collect()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WizardStep {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .iter()
            .copied()
            .find(|step| step.slug() == s)
            .ok_or_else(|| {
                let slugs: Vec<&str> = Self::ORDER.iter().map(|step| step.slug()).collect();
                ValidationError::not_in_set("step", s, &slugs)
            })
    }
}
