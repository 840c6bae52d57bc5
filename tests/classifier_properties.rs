//! Property tests for normalization, classification and recommendations.

use proptest::prelude::*;
use serde_json::{json, Value};

use cycle_assessment::domain::assessment::{
    assemble, base_recommendations, flatten, normalize, recommend, AssessmentInput, Classifier,
    Pattern,
};
use cycle_assessment::domain::foundation::UserId;

// =============================================================================
// Strategies
// =============================================================================

/// A bracket value: usually a known one, sometimes junk, sometimes unset.
fn bracket(known: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        3 => proptest::sample::select(known).prop_map(|s| Some(s.to_string())),
        1 => "[a-z0-9-]{1,10}".prop_map(Some),
        1 => Just(None),
    ]
}

fn symptom_list() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        prop_oneof![
            3 => proptest::sample::select(&[
                "Cramps", "Headache", "Bloating", "Fatigue", "Back pain", "Acne",
                "Mood swings", "Anxiety", "Irritability", "Food cravings", "Sleep disturbances",
            ][..])
            .prop_map(str::to_string),
            1 => "[A-Za-z ]{1,12}",
        ],
        0..5,
    )
}

prop_compose! {
    fn any_input()(
        age in bracket(&["under-13", "13-17", "18-24", "25-plus"]),
        cycle_length in bracket(&[
            "irregular", "less-than-21", "21-25", "26-30", "31-35", "more-than-35", "not-sure",
        ]),
        period_duration in bracket(&["1-3", "4-5", "6-7", "8-plus"]),
        flow_heaviness in bracket(&["light", "moderate", "heavy"]),
        pain_level in bracket(&["none", "mild", "moderate", "severe"]),
        physical in symptom_list(),
        emotional in symptom_list(),
        other in symptom_list(),
    ) -> AssessmentInput {
        AssessmentInput {
            age,
            cycle_length,
            period_duration,
            flow_heaviness,
            pain_level,
            physical_symptoms: physical.into_iter().collect(),
            emotional_symptoms: emotional.into_iter().collect(),
            other_symptoms: other.into_iter().collect(),
        }
    }
}

/// Renders an input in the legacy-nested shape, symptoms as arrays.
fn legacy(input: &AssessmentInput) -> Value {
    json!({
        "assessment_data": {
            "age": input.age,
            "cycle_length": input.cycle_length,
            "period_duration": input.period_duration,
            "flow_heaviness": input.flow_heaviness,
            "pain_level": input.pain_level,
            "symptoms": {
                "physical": input.physical_symptoms.as_slice(),
                "emotional": input.emotional_symptoms.as_slice(),
                "other": input.other_symptoms.as_slice(),
            }
        }
    })
}

fn complete(age: &str, cycle: &str, duration: &str, flow: &str, pain: &str) -> AssessmentInput {
    AssessmentInput {
        age: Some(age.to_string()),
        cycle_length: Some(cycle.to_string()),
        period_duration: Some(duration.to_string()),
        flow_heaviness: Some(flow.to_string()),
        pain_level: Some(pain.to_string()),
        ..AssessmentInput::new()
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn classification_is_total_and_deterministic(input in any_input()) {
        let classifier = Classifier::default();
        let first = classifier.classify(&input);
        prop_assert!(Pattern::all().contains(&first));
        prop_assert_eq!(classifier.classify(&input), first);
    }

    #[test]
    fn recommendations_start_with_the_pattern_base(input in any_input()) {
        let pattern = Classifier::default().classify(&input);
        let recommendations = recommend(pattern, &input);
        let base = base_recommendations(pattern);

        prop_assert_eq!(&recommendations[..base.len()], &base[..]);
        prop_assert_eq!(recommend(pattern, &input), recommendations.clone());

        let mut titles: Vec<&str> = recommendations.iter().map(|r| r.title.as_str()).collect();
        let total = titles.len();
        titles.sort_unstable();
        titles.dedup();
        prop_assert_eq!(titles.len(), total);
    }

    #[test]
    fn severe_pain_wins_over_everything(mut input in any_input()) {
        input.pain_level = Some("severe".to_string());
        input.flow_heaviness = Some("heavy".to_string());
        input.cycle_length = Some("irregular".to_string());
        prop_assert_eq!(Classifier::default().classify(&input), Pattern::Pain);
    }

    #[test]
    fn legacy_and_flattened_shapes_agree(input in any_input()) {
        let from_legacy = normalize(&legacy(&input)).unwrap();
        let from_flat = normalize(&flatten(&input)).unwrap();
        prop_assert_eq!(&from_legacy, &from_flat);
    }

    #[test]
    fn normalization_is_idempotent(input in any_input()) {
        let once = normalize(&legacy(&input)).unwrap();
        let twice = normalize(&flatten(&once)).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn non_objects_are_rejected(value in prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]) {
        prop_assert!(normalize(&value).is_err());
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn typical_adult_with_fatigue_is_regular_with_fatigue_advice_last() {
    let mut input = complete("18-24", "26-30", "4-5", "moderate", "mild");
    input.physical_symptoms = ["Fatigue"].into_iter().collect();

    let record = assemble(input, UserId::new("user-1").unwrap(), &Classifier::default()).unwrap();

    assert_eq!(record.pattern, Pattern::Regular);
    let titles: Vec<&str> = record.recommendations.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Track Your Cycle", "Exercise Regularly", "Manage Fatigue"]);
}

#[test]
fn heavy_flow_without_severe_pain_is_heavy() {
    let input = complete("25-plus", "26-30", "6-7", "heavy", "mild");
    assert_eq!(Classifier::default().classify(&input), Pattern::Heavy);
}

#[test]
fn adolescent_with_unsettled_cycle_is_developing() {
    let input = complete("13-17", "not-sure", "4-5", "moderate", "none");
    assert_eq!(Classifier::default().classify(&input), Pattern::Developing);
}

#[test]
fn legacy_single_string_symptom_is_read_as_a_set() {
    let raw = json!({
        "assessment_data": {
            "age": "18-24",
            "cycle_length": "26-30",
            "period_duration": "4-5",
            "flow_heaviness": "moderate",
            "pain_level": "moderate",
            "symptoms": { "physical": "Cramps" }
        }
    });

    let input = normalize(&raw).unwrap();
    assert!(input.physical_symptoms.contains("Cramps"));
    assert!(input.emotional_symptoms.is_empty());
    assert_eq!(Classifier::default().classify(&input), Pattern::Pain);
}

#[test]
fn assembling_an_incomplete_input_fails() {
    let mut input = complete("18-24", "26-30", "4-5", "moderate", "mild");
    input.pain_level = None;
    assert!(assemble(input, UserId::new("user-1").unwrap(), &Classifier::default()).is_err());
}
