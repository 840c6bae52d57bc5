//! Read-back decoding for records returned by the persistence API.
//!
//! Observations go through the normalizer, so both the flattened and the
//! legacy-nested shapes decode. Metadata (`id`, owner, timestamps) is read
//! from the top level under either naming convention. A record without a
//! recognizable pattern or recommendation list has them recomputed.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::domain::assessment::{
    normalize, recommend, Assessment, AssessmentInput, Classifier, NewAssessment, Pattern,
    PersistenceError, Recommendation,
};
use crate::domain::foundation::{AssessmentId, Timestamp, UserId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredMetadata {
    id: AssessmentId,
    #[serde(alias = "user_id")]
    user_id: UserId,
    #[serde(alias = "created_at")]
    created_at: Timestamp,
    #[serde(alias = "updated_at", default)]
    updated_at: Option<Timestamp>,
}

/// Decodes one stored record.
///
/// # Errors
///
/// - `MalformedResponse` if the record is not an object, lacks metadata,
///   or is missing a required observation
pub fn decode_stored(raw: &JsonValue, classifier: &Classifier) -> Result<Assessment, PersistenceError> {
    let input = normalize(raw).map_err(|e| PersistenceError::MalformedResponse(e.to_string()))?;
    let metadata = StoredMetadata::deserialize(raw)
        .map_err(|e| PersistenceError::MalformedResponse(format!("record metadata: {}", e)))?;

    let legacy = raw.get("assessment_data");
    if legacy.is_some() {
        tracing::warn!(assessment_id = %metadata.id, "Read back legacy-nested assessment record");
    }

    let pattern = lookup(raw, legacy, "pattern")
        .and_then(JsonValue::as_str)
        .and_then(|label| label.parse::<Pattern>().ok())
        .unwrap_or_else(|| classifier.classify(&input));

    let recommendations = lookup(raw, legacy, "recommendations")
        .and_then(|value| Vec::<Recommendation>::deserialize(value).ok())
        .unwrap_or_else(|| recommend(pattern, &input));

    let record = into_record(input, metadata.user_id, pattern, recommendations)?;
    Ok(Assessment::reconstitute(
        metadata.id,
        record,
        metadata.created_at,
        metadata.updated_at.unwrap_or(metadata.created_at),
    ))
}

/// Decodes a list response: either a bare array or `{ "assessments": [...] }`.
pub fn decode_stored_list(
    raw: &JsonValue,
    classifier: &Classifier,
) -> Result<Vec<Assessment>, PersistenceError> {
    let items = raw
        .as_array()
        .or_else(|| raw.get("assessments").and_then(JsonValue::as_array))
        .ok_or_else(|| PersistenceError::MalformedResponse("expected a list of assessments".to_string()))?;

    items.iter().map(|item| decode_stored(item, classifier)).collect()
}

fn lookup<'a>(raw: &'a JsonValue, legacy: Option<&'a JsonValue>, key: &str) -> Option<&'a JsonValue> {
    raw.get(key)
        .or_else(|| legacy.and_then(|nested| nested.get(key)))
        .filter(|value| !value.is_null())
}

fn into_record(
    input: AssessmentInput,
    user_id: UserId,
    pattern: Pattern,
    recommendations: Vec<Recommendation>,
) -> Result<NewAssessment, PersistenceError> {
    let missing = input.missing_required();
    let AssessmentInput {
        age: Some(age),
        cycle_length: Some(cycle_length),
        period_duration: Some(period_duration),
        flow_heaviness: Some(flow_heaviness),
        pain_level: Some(pain_level),
        physical_symptoms,
        emotional_symptoms,
        other_symptoms,
    } = input
    else {
        let names: Vec<&str> = missing.iter().map(|f| f.wire_name()).collect();
        return Err(PersistenceError::MalformedResponse(format!(
            "stored record is missing {}",
            names.join(", ")
        )));
    };

    Ok(NewAssessment {
        user_id,
        age,
        cycle_length,
        period_duration,
        flow_heaviness,
        pain_level,
        physical_symptoms,
        emotional_symptoms,
        other_symptoms,
        pattern,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flattened() -> JsonValue {
        json!({
            "id": "5f0c6b8e-2d5c-4c1e-9f55-0a4c1f1d2b3a",
            "userId": "user-1",
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-02T10:00:00Z",
            "age": "18-24",
            "cycleLength": "26-30",
            "periodDuration": "4-5",
            "flowHeaviness": "moderate",
            "painLevel": "mild",
            "physicalSymptoms": ["Fatigue"],
            "emotionalSymptoms": [],
            "otherSymptoms": [],
            "pattern": "regular",
            "recommendations": [
                {"title": "Track Your Cycle", "description": "stored text"}
            ]
        })
    }

    #[test]
    fn decodes_flattened_record_keeping_stored_results() {
        let assessment = decode_stored(&flattened(), &Classifier::default()).unwrap();

        assert_eq!(assessment.user_id().as_str(), "user-1");
        assert_eq!(assessment.pattern(), Pattern::Regular);
        assert_eq!(assessment.recommendations().len(), 1);
        assert_eq!(assessment.recommendations()[0].description, "stored text");
        assert!(assessment.created_at().is_before(assessment.updated_at()));
    }

    #[test]
    fn decodes_legacy_record_and_recomputes_missing_results() {
        let raw = json!({
            "id": "5f0c6b8e-2d5c-4c1e-9f55-0a4c1f1d2b3a",
            "user_id": "user-1",
            "created_at": "2023-11-20T08:30:00Z",
            "assessment_data": {
                "age": "18-24",
                "cycle_length": "irregular",
                "period_duration": "4-5",
                "flow_heaviness": "light",
                "pain_level": "none",
                "symptoms": {"physical": "Bloating", "emotional": ["Anxiety"]}
            }
        });

        let assessment = decode_stored(&raw, &Classifier::default()).unwrap();

        assert_eq!(assessment.pattern(), Pattern::Irregular);
        assert_eq!(assessment.created_at(), assessment.updated_at());
        assert!(assessment.record().physical_symptoms.contains("Bloating"));
        let titles: Vec<&str> = assessment.recommendations().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles.first(), Some(&"Track Your Cycle Closely"));
        assert!(titles.contains(&"Reduce Bloating"));
    }

    #[test]
    fn unknown_stored_pattern_is_recomputed() {
        let mut raw = flattened();
        raw["pattern"] = json!("unusual");
        let assessment = decode_stored(&raw, &Classifier::default()).unwrap();
        assert_eq!(assessment.pattern(), Pattern::Regular);
    }

    #[test]
    fn incomplete_record_is_malformed() {
        let mut raw = flattened();
        raw["painLevel"] = JsonValue::Null;
        let err = decode_stored(&raw, &Classifier::default()).unwrap_err();
        assert_eq!(
            err,
            PersistenceError::MalformedResponse("stored record is missing painLevel".to_string())
        );
    }

    #[test]
    fn non_object_record_is_malformed() {
        let err = decode_stored(&json!(["not", "a", "record"]), &Classifier::default()).unwrap_err();
        assert!(matches!(err, PersistenceError::MalformedResponse(_)));
    }

    #[test]
    fn list_accepts_bare_array_or_wrapped_object() {
        let classifier = Classifier::default();
        assert_eq!(decode_stored_list(&json!([flattened()]), &classifier).unwrap().len(), 1);
        assert_eq!(
            decode_stored_list(&json!({"assessments": [flattened(), flattened()]}), &classifier)
                .unwrap()
                .len(),
            2
        );
        assert!(decode_stored_list(&json!({"items": []}), &classifier).is_err());
    }
}
