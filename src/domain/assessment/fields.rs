//! Assessment field catalog.
//!
//! Names every collected field, its wire name and the enumerated set the
//! wizard validates submissions against. Classification does not use these
//! sets; it matches against the configurable boundary table instead.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

pub const AGE_BRACKETS: [&str; 4] = ["under-13", "13-17", "18-24", "25-plus"];

pub const CYCLE_LENGTH_BRACKETS: [&str; 7] = [
    "irregular",
    "less-than-21",
    "21-25",
    "26-30",
    "31-35",
    "more-than-35",
    "not-sure",
];

pub const PERIOD_DURATION_BRACKETS: [&str; 4] = ["1-3", "4-5", "6-7", "8-plus"];

pub const FLOW_LEVELS: [&str; 3] = ["light", "moderate", "heavy"];

pub const PAIN_LEVELS: [&str; 4] = ["none", "mild", "moderate", "severe"];

pub const PHYSICAL_SYMPTOMS: [&str; 8] = [
    "Cramps",
    "Headache",
    "Bloating",
    "Breast tenderness",
    "Fatigue",
    "Back pain",
    "Nausea",
    "Acne",
];

pub const EMOTIONAL_SYMPTOMS: [&str; 5] = [
    "Mood swings",
    "Anxiety",
    "Irritability",
    "Depression",
    "Difficulty concentrating",
];

pub const OTHER_SYMPTOMS: [&str; 4] = [
    "Sleep disturbances",
    "Food cravings",
    "Digestive issues",
    "Spotting between periods",
];

/// The five single-choice fields required before an assessment can be assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssessmentField {
    Age,
    CycleLength,
    PeriodDuration,
    FlowHeaviness,
    PainLevel,
}

impl AssessmentField {
    /// All required fields in collection order.
    pub fn all() -> &'static [AssessmentField] {
        &[
            AssessmentField::Age,
            AssessmentField::CycleLength,
            AssessmentField::PeriodDuration,
            AssessmentField::FlowHeaviness,
            AssessmentField::PainLevel,
        ]
    }

    /// Field name as it appears in the flattened record.
    pub fn wire_name(&self) -> &'static str {
        match self {
            AssessmentField::Age => "age",
            AssessmentField::CycleLength => "cycleLength",
            AssessmentField::PeriodDuration => "periodDuration",
            AssessmentField::FlowHeaviness => "flowHeaviness",
            AssessmentField::PainLevel => "painLevel",
        }
    }

    /// The enumerated set accepted by the wizard for this field.
    pub fn allowed_values(&self) -> &'static [&'static str] {
        match self {
            AssessmentField::Age => &AGE_BRACKETS,
            AssessmentField::CycleLength => &CYCLE_LENGTH_BRACKETS,
            AssessmentField::PeriodDuration => &PERIOD_DURATION_BRACKETS,
            AssessmentField::FlowHeaviness => &FLOW_LEVELS,
            AssessmentField::PainLevel => &PAIN_LEVELS,
        }
    }

    /// Validates a submitted value against the field's enumerated set.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if self.allowed_values().contains(&value) {
            Ok(())
        } else {
            Err(ValidationError::not_in_set(
                self.wire_name(),
                value,
                self.allowed_values(),
            ))
        }
    }
}

impl fmt::Display for AssessmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// The three free-selection symptom groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymptomCategory {
    Physical,
    Emotional,
    Other,
}

impl SymptomCategory {
    /// All categories in the order their triggered recommendations are appended.
    pub fn all() -> &'static [SymptomCategory] {
        &[
            SymptomCategory::Physical,
            SymptomCategory::Emotional,
            SymptomCategory::Other,
        ]
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            SymptomCategory::Physical => "physicalSymptoms",
            SymptomCategory::Emotional => "emotionalSymptoms",
            SymptomCategory::Other => "otherSymptoms",
        }
    }

    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            SymptomCategory::Physical => &PHYSICAL_SYMPTOMS,
            SymptomCategory::Emotional => &EMOTIONAL_SYMPTOMS,
            SymptomCategory::Other => &OTHER_SYMPTOMS,
        }
    }

    /// Validates one selected symptom against the category catalog.
    pub fn validate(&self, symptom: &str) -> Result<(), ValidationError> {
        if self.catalog().contains(&symptom) {
            Ok(())
        } else {
            Err(ValidationError::not_in_set(
                self.wire_name(),
                symptom,
                self.catalog(),
            ))
        }
    }
}
