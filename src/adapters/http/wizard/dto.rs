//! HTTP DTOs for wizard endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::PreviewResults;
use crate::domain::assessment::{Recommendation, SymptomSet};
use crate::domain::wizard::{StepValue, WizardState, WizardStep};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// `?quick=true` carried on every wizard URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuickParams {
    #[serde(default)]
    pub quick: Option<bool>,
}

/// Body of a step submission.
///
/// `{ "value": "18-24" }` for single-choice steps, or
/// `{ "physical": [...], "emotional": [...], "other": [...] }` for symptoms.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SubmitStepRequest {
    Choice {
        value: String,
    },
    Symptoms {
        #[serde(default)]
        physical: Vec<String>,
        #[serde(default)]
        emotional: Vec<String>,
        #[serde(default)]
        other: Vec<String>,
    },
}

impl From<SubmitStepRequest> for StepValue {
    fn from(req: SubmitStepRequest) -> Self {
        match req {
            SubmitStepRequest::Choice { value } => StepValue::Choice(value),
            SubmitStepRequest::Symptoms {
                physical,
                emotional,
                other,
            } => StepValue::symptoms(
                physical.into_iter().collect(),
                emotional.into_iter().collect(),
                other.into_iter().collect(),
            ),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Value recorded for the current step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepValueResponse {
    Choice(String),
    Symptoms {
        physical: SymptomSet,
        emotional: SymptomSet,
        other: SymptomSet,
    },
}

impl From<StepValue> for StepValueResponse {
    fn from(value: StepValue) -> Self {
        match value {
            StepValue::Choice(choice) => StepValueResponse::Choice(choice),
            StepValue::Symptoms {
                physical,
                emotional,
                other,
            } => StepValueResponse::Symptoms {
                physical,
                emotional,
                other,
            },
        }
    }
}

/// The current step view handed to presentation.
#[derive(Debug, Clone, Serialize)]
pub struct WizardStateResponse {
    pub session_id: String,
    pub step: String,
    pub step_number: usize,
    pub step_name: String,
    pub value: Option<StepValueResponse>,
    pub can_advance: bool,
    pub quick_response: bool,
    /// Link for the "continue" action, carrying `?quick=true` when active.
    pub next: Option<String>,
    pub first_unset_step: Option<String>,
}

impl From<&WizardState> for WizardStateResponse {
    fn from(state: &WizardState) -> Self {
        Self {
            session_id: state.session_id().to_string(),
            step: state.step().slug().to_string(),
            step_number: state.step().number(),
            step_name: state.step().display_name().to_string(),
            value: state.current_value().map(Into::into),
            can_advance: state.can_advance(),
            quick_response: state.quick_response(),
            next: next_link(state),
            first_unset_step: state.first_unset_step().map(|s| s.slug().to_string()),
        }
    }
}

/// Path of the step after the current one, with the quick flag propagated.
pub fn next_link(state: &WizardState) -> Option<String> {
    let next: WizardStep = state.step().next()?;
    let mut link = format!("/assessment/{}/{}", state.session_id(), next.slug());
    if state.quick_response() {
        link.push_str("?quick=true");
    }
    Some(link)
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub description: String,
}

impl From<&Recommendation> for RecommendationResponse {
    fn from(rec: &Recommendation) -> Self {
        Self {
            title: rec.title.clone(),
            description: rec.description.clone(),
        }
    }
}

/// Results-screen preview.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewResponse {
    pub pattern: String,
    pub pattern_name: String,
    pub recommendations: Vec<RecommendationResponse>,
}

impl From<PreviewResults> for PreviewResponse {
    fn from(preview: PreviewResults) -> Self {
        Self {
            pattern: preview.pattern.as_str().to_string(),
            pattern_name: preview.pattern.display_name().to_string(),
            recommendations: preview.recommendations.iter().map(Into::into).collect(),
        }
    }
}
