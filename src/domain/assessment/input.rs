//! AssessmentInput - the incrementally built set of observations.

use serde::{Deserialize, Serialize};

use super::fields::{AssessmentField, SymptomCategory};
use super::symptoms::SymptomSet;

/// Observations collected by the wizard.
///
/// Bracket fields are held as opaque strings so records written with
/// values outside today's catalog survive normalization untouched.
/// `None` means the step has not been visited yet; once set, a field is
/// only ever overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub age: Option<String>,
    pub cycle_length: Option<String>,
    pub period_duration: Option<String>,
    pub flow_heaviness: Option<String>,
    pub pain_level: Option<String>,
    #[serde(default)]
    pub physical_symptoms: SymptomSet,
    #[serde(default)]
    pub emotional_symptoms: SymptomSet,
    #[serde(default)]
    pub other_symptoms: SymptomSet,
}

impl AssessmentInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded value for a required field.
    pub fn get(&self, field: AssessmentField) -> Option<&str> {
        let value = match field {
            AssessmentField::Age => &self.age,
            AssessmentField::CycleLength => &self.cycle_length,
            AssessmentField::PeriodDuration => &self.period_duration,
            AssessmentField::FlowHeaviness => &self.flow_heaviness,
            AssessmentField::PainLevel => &self.pain_level,
        };
        value.as_deref()
    }

    /// Records (or overwrites) a required field. No validation happens here.
    pub fn set(&mut self, field: AssessmentField, value: impl Into<String>) {
        let slot = match field {
            AssessmentField::Age => &mut self.age,
            AssessmentField::CycleLength => &mut self.cycle_length,
            AssessmentField::PeriodDuration => &mut self.period_duration,
            AssessmentField::FlowHeaviness => &mut self.flow_heaviness,
            AssessmentField::PainLevel => &mut self.pain_level,
        };
        *slot = Some(value.into());
    }

    pub fn symptoms(&self, category: SymptomCategory) -> &SymptomSet {
        match category {
            SymptomCategory::Physical => &self.physical_symptoms,
            SymptomCategory::Emotional => &self.emotional_symptoms,
            SymptomCategory::Other => &self.other_symptoms,
        }
    }

    pub fn set_symptoms(&mut self, category: SymptomCategory, symptoms: SymptomSet) {
        match category {
            SymptomCategory::Physical => self.physical_symptoms = symptoms,
            SymptomCategory::Emotional => self.emotional_symptoms = symptoms,
            SymptomCategory::Other => self.other_symptoms = symptoms,
        }
    }

    /// Required fields that are still unset, in collection order.
    pub fn missing_required(&self) -> Vec<AssessmentField> {
        AssessmentField::all()
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// All recorded symptoms, physical first, then emotional, then other.
    pub fn all_symptoms(&self) -> impl Iterator<Item = &str> {
        SymptomCategory::all()
            .iter()
            .flat_map(move |category| self.symptoms(*category).iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_input_has_every_required_field_missing() {
        let input = AssessmentInput::new();
        assert_eq!(input.missing_required(), AssessmentField::all().to_vec());
        assert!(!input.is_complete());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut input = AssessmentInput::new();
        input.set(AssessmentField::PainLevel, "mild");
        input.set(AssessmentField::PainLevel, "severe");
        assert_eq!(input.get(AssessmentField::PainLevel), Some("severe"));
    }

    #[test]
    fn missing_required_reports_in_collection_order() {
        let mut input = AssessmentInput::new();
        input.set(AssessmentField::Age, "18-24");
        input.set(AssessmentField::FlowHeaviness, "light");
        assert_eq!(
            input.missing_required(),
            vec![
                AssessmentField::CycleLength,
                AssessmentField::PeriodDuration,
                AssessmentField::PainLevel
            ]
        );
    }

    #[test]
    fn all_symptoms_walks_categories_in_order() {
        let mut input = AssessmentInput::new();
        input.set_symptoms(SymptomCategory::Other, ["Food cravings"].into_iter().collect());
        input.set_symptoms(SymptomCategory::Physical, ["Fatigue"].into_iter().collect());
        input.set_symptoms(SymptomCategory::Emotional, ["Anxiety"].into_iter().collect());

        let all: Vec<&str> = input.all_symptoms().collect();
        assert_eq!(all, vec!["Fatigue", "Anxiety", "Food cravings"]);
    }

    #[test]
    fn serializes_unset_fields_as_null() {
        let json = serde_json::to_value(AssessmentInput::new()).unwrap();
        assert!(json["cycleLength"].is_null());
        assert_eq!(json["physicalSymptoms"], serde_json::json!([]));
    }
}
