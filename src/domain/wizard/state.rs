//! WizardState - the pure wizard transition model.
//!
//! Every transition takes the current state by reference and returns the
//! next one, so a failed submission leaves the caller's state untouched.

use serde::{Deserialize, Serialize};

use super::{StepValue, WizardError, WizardStep};
use crate::domain::assessment::{AssessmentInput, SymptomCategory, SymptomSet};
use crate::domain::foundation::{StateMachine, ValidationError, WizardSessionId};

/// Position in the wizard plus everything collected so far.
///
/// `quick_response` is routing metadata only: it never reaches the
/// collected input and does not change validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    session_id: WizardSessionId,
    step: WizardStep,
    input: AssessmentInput,
    #[serde(default)]
    quick_response: bool,
}

impl WizardState {
    /// Fresh wizard positioned at the first step with nothing recorded.
    pub fn new(session_id: WizardSessionId, quick_response: bool) -> Self {
        Self {
            session_id,
            step: WizardStep::first(),
            input: AssessmentInput::new(),
            quick_response,
        }
    }

    /// Wizard at the first step with every field already filled in.
    ///
    /// Used when revising a stored assessment: the user walks the steps
    /// again and only resubmitted values change.
    pub fn prefilled(
        session_id: WizardSessionId,
        input: AssessmentInput,
        quick_response: bool,
    ) -> Self {
        Self {
            session_id,
            step: WizardStep::first(),
            input,
            quick_response,
        }
    }

    pub fn session_id(&self) -> &WizardSessionId {
        &self.session_id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn input(&self) -> &AssessmentInput {
        &self.input
    }

    pub fn quick_response(&self) -> bool {
        self.quick_response
    }

    pub fn with_quick_response(mut self, quick_response: bool) -> Self {
        self.quick_response = quick_response;
        self
    }

    pub fn is_complete(&self) -> bool {
        self.step.is_terminal()
    }

    /// Validates `value` against the current step, records it and advances.
    ///
    /// Only the current step's field is written; values recorded at later
    /// steps survive a revisit until they are resubmitted themselves.
    pub fn submit(&self, value: StepValue) -> Result<WizardState, WizardError> {
        let step = self.step;
        let target = step.next().ok_or(WizardError::AlreadyComplete)?;

        let mut input = self.input.clone();
        match (step.field(), value) {
            (Some(field), StepValue::Choice(choice)) => {
                field
                    .validate(&choice)
                    .map_err(|e| WizardError::validation(step, e))?;
                input.set(field, choice);
            }
            (
                None,
                StepValue::Symptoms {
                    physical,
                    emotional,
                    other,
                },
            ) => {
                let groups = [
                    (SymptomCategory::Physical, physical),
                    (SymptomCategory::Emotional, emotional),
                    (SymptomCategory::Other, other),
                ];
                for (category, symptoms) in &groups {
                    validate_symptoms(*category, symptoms)
                        .map_err(|e| WizardError::validation(step, e))?;
                }
                for (category, symptoms) in groups {
                    input.set_symptoms(category, symptoms);
                }
            }
            (_, other) => {
                return Err(WizardError::validation(
                    step,
                    ValidationError::invalid_format(
                        field_name(step),
                        format!("expected {} value, got {}", expected_kind(step), other.kind()),
                    ),
                ));
            }
        }

        let next = step
            .transition_to(target)
            .map_err(|e| WizardError::validation(step, e))?;

        Ok(WizardState {
            session_id: self.session_id,
            step: next,
            input,
            quick_response: self.quick_response,
        })
    }

    /// Moves to the previous step without clearing anything.
    ///
    /// At the first step this is a no-op.
    pub fn back(&self) -> WizardState {
        let mut state = self.clone();
        if let Some(previous) = self.step.previous() {
            state.step = previous;
        }
        state
    }

    /// The value already recorded for the current step, if any.
    pub fn current_value(&self) -> Option<StepValue> {
        match self.step {
            WizardStep::Results => None,
            WizardStep::Symptoms => Some(StepValue::symptoms(
                self.input.physical_symptoms.clone(),
                self.input.emotional_symptoms.clone(),
                self.input.other_symptoms.clone(),
            )),
            step => step
                .field()
                .and_then(|field| self.input.get(field))
                .map(StepValue::choice),
        }
    }

    /// True once the current step holds a value that would pass validation.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Results => false,
            WizardStep::Symptoms => SymptomCategory::all()
                .iter()
                .all(|category| validate_symptoms(*category, self.input.symptoms(*category)).is_ok()),
            step => step
                .field()
                .and_then(|field| self.input.get(field).map(|value| field.validate(value)))
                .map_or(false, |result| result.is_ok()),
        }
    }

    /// The earliest step whose required field is still unset.
    pub fn first_unset_step(&self) -> Option<WizardStep> {
        self.input
            .missing_required()
            .first()
            .map(|field| WizardStep::for_field(*field))
    }
}

fn validate_symptoms(category: SymptomCategory, symptoms: &SymptomSet) -> Result<(), ValidationError> {
    symptoms
        .iter()
        .try_for_each(|symptom| category.validate(symptom))
}

/// Wire name reported when a step receives the wrong kind of value.
fn field_name(step: WizardStep) -> &'static str {
    step.field().map_or("symptoms", |field| field.wire_name())
}

fn expected_kind(step: WizardStep) -> &'static str {
    if step.field().is_some() {
        "choice"
    } else {
        "symptoms"
    }
}
