//! Legacy normalizer.
//!
//! Assessment data has been stored in two shapes over time:
//!
//! - **Flattened** (current): fields at the top level, camelCase names.
//! - **Legacy-nested**: fields under `assessment_data`, snake_case names,
//!   symptoms under `symptoms.physical` / `symptoms.emotional` /
//!   `symptoms.other`, each either a single string or an array.
//!
//! Both decode into the same [`AssessmentInput`]. The decode is a serde
//! untagged enum: the legacy variant only matches when `assessment_data`
//! is present, everything else falls through to the flattened variant.
//!
//! Individual fields are decoded leniently. Bracket values are kept as
//! opaque strings (numbers and booleans are stringified), anything else
//! becomes unset. An empty or whitespace-only string counts as unset, so
//! the wizard asks for that field again. Only a non-object input is rejected.

use serde::{Deserialize, Deserializer};
use serde_json::{json, Value as JsonValue};

use super::errors::AssessmentError;
use super::input::AssessmentInput;
use super::symptoms::SymptomSet;

/// Normalizes raw assessment data of either historical shape.
///
/// # Errors
///
/// - `InvalidShape` if `raw` is not a JSON object
pub fn normalize(raw: &JsonValue) -> Result<AssessmentInput, AssessmentError> {
    if !raw.is_object() {
        return Err(AssessmentError::InvalidShape {
            found: json_kind(raw),
        });
    }

    let decoded = RawAssessment::deserialize(raw).unwrap_or_else(|e| {
        tracing::warn!("Assessment data could not be decoded, using empty input: {}", e);
        RawAssessment::Flattened(FlattenedRecord::default())
    });

    Ok(match decoded {
        RawAssessment::Legacy { assessment_data } => {
            tracing::debug!("Normalizing legacy-nested assessment data");
            LegacyData::from_value(&assessment_data).into_input()
        }
        RawAssessment::Flattened(record) => record.into_input(),
    })
}

/// Renders an input in the flattened (canonical) shape.
///
/// Unset fields are written as explicit `null`, symptom sets as arrays.
pub fn flatten(input: &AssessmentInput) -> JsonValue {
    json!({
        "age": input.age,
        "cycleLength": input.cycle_length,
        "periodDuration": input.period_duration,
        "flowHeaviness": input.flow_heaviness,
        "painLevel": input.pain_level,
        "physicalSymptoms": input.physical_symptoms.as_slice(),
        "emotionalSymptoms": input.emotional_symptoms.as_slice(),
        "otherSymptoms": input.other_symptoms.as_slice(),
    })
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Shape variants
// ════════════════════════════════════════════════════════════════════════════

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAssessment {
    Legacy { assessment_data: JsonValue },
    Flattened(FlattenedRecord),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FlattenedRecord {
    age: Opaque,
    cycle_length: Opaque,
    period_duration: Opaque,
    flow_heaviness: Opaque,
    pain_level: Opaque,
    physical_symptoms: LenientSymptoms,
    emotional_symptoms: LenientSymptoms,
    other_symptoms: LenientSymptoms,
}

impl FlattenedRecord {
    fn into_input(self) -> AssessmentInput {
        AssessmentInput {
            age: self.age.0,
            cycle_length: self.cycle_length.0,
            period_duration: self.period_duration.0,
            flow_heaviness: self.flow_heaviness.0,
            pain_level: self.pain_level.0,
            physical_symptoms: self.physical_symptoms.0,
            emotional_symptoms: self.emotional_symptoms.0,
            other_symptoms: self.other_symptoms.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LegacyData {
    age: Opaque,
    #[serde(alias = "cycleLength")]
    cycle_length: Opaque,
    #[serde(alias = "periodDuration")]
    period_duration: Opaque,
    #[serde(alias = "flowHeaviness", alias = "flow")]
    flow_heaviness: Opaque,
    #[serde(alias = "painLevel", alias = "pain")]
    pain_level: Opaque,
    symptoms: LegacySymptoms,
}

impl LegacyData {
    fn from_value(value: &JsonValue) -> Self {
        if !value.is_object() {
            tracing::warn!("assessment_data is {}, treating every field as unset", json_kind(value));
            return Self::default();
        }
        LegacyData::deserialize(value).unwrap_or_else(|e| {
            tracing::warn!("Legacy assessment_data could not be decoded: {}", e);
            Self::default()
        })
    }

    fn into_input(self) -> AssessmentInput {
        AssessmentInput {
            age: self.age.0,
            cycle_length: self.cycle_length.0,
            period_duration: self.period_duration.0,
            flow_heaviness: self.flow_heaviness.0,
            pain_level: self.pain_level.0,
            physical_symptoms: self.symptoms.physical,
            emotional_symptoms: self.symptoms.emotional,
            other_symptoms: self.symptoms.other,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Lenient field decoders
// ════════════════════════════════════════════════════════════════════════════

/// A bracket value passed through as an opaque string.
#[derive(Debug, Default)]
struct Opaque(Option<String>);

impl<'de> Deserialize<'de> for Opaque {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Ok(Opaque(match value {
            JsonValue::String(s) if !s.trim().is_empty() => Some(s),
            JsonValue::Number(n) => Some(n.to_string()),
            JsonValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }))
    }
}

/// A symptom field given as a single string, an array, or nothing usable.
#[derive(Debug, Default)]
struct LenientSymptoms(SymptomSet);

impl LenientSymptoms {
    fn from_value(value: &JsonValue) -> Self {
        LenientSymptoms(match value {
            JsonValue::String(s) if !s.trim().is_empty() => [s.as_str()].into_iter().collect(),
            JsonValue::Array(items) => items.iter().filter_map(JsonValue::as_str).collect(),
            _ => SymptomSet::new(),
        })
    }
}

impl<'de> Deserialize<'de> for LenientSymptoms {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Ok(LenientSymptoms::from_value(&value))
    }
}

/// The legacy `symptoms` object; a non-object value yields empty sets.
#[derive(Debug, Default)]
struct LegacySymptoms {
    physical: SymptomSet,
    emotional: SymptomSet,
    other: SymptomSet,
}

impl<'de> Deserialize<'de> for LegacySymptoms {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        let pick = |key: &str| {
            value
                .get(key)
                .map(|v| LenientSymptoms::from_value(v).0)
                .unwrap_or_default()
        };
        Ok(LegacySymptoms {
            physical: pick("physical"),
            emotional: pick("emotional"),
            other: pick("other"),
        })
    }
}
