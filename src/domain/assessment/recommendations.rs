//! Recommendation generator.
//!
//! Each pattern has a fixed base sequence. Symptom-specific entries follow
//! it in the order their triggering symptoms were recorded (physical,
//! emotional, then other). An entry is emitted at most once.

use serde::{Deserialize, Serialize};

use super::{AssessmentInput, Pattern};

/// A single displayable recommendation. Order in a sequence is display priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

const TRACK_YOUR_CYCLE: (&str, &str) = (
    "Track Your Cycle",
    "Keep logging period start dates, flow and symptoms so changes are easy to spot over time.",
);

const CONSULT_PROVIDER: (&str, &str) = (
    "Consult a Healthcare Provider",
    "Share your tracked cycle history with a doctor or gynecologist to rule out underlying conditions.",
);

fn base_entries(pattern: Pattern) -> &'static [(&'static str, &'static str)] {
    match pattern {
        Pattern::Regular => &[
            TRACK_YOUR_CYCLE,
            (
                "Exercise Regularly",
                "Moderate activity such as walking, swimming or yoga supports hormonal balance and can ease cramps.",
            ),
        ],
        Pattern::Irregular => &[
            (
                "Track Your Cycle Closely",
                "Record each period's start and end date for at least three months to reveal how variable your cycle is.",
            ),
            CONSULT_PROVIDER,
            (
                "Manage Stress",
                "Stress, sleep loss and sudden weight changes can all delay ovulation; build in regular rest and relaxation.",
            ),
        ],
        Pattern::Heavy => &[
            (
                "Monitor Your Flow",
                "Note how often you change pads or tampons; soaking through one every hour for several hours needs medical attention.",
            ),
            (
                "Iron-Rich Diet",
                "Heavy bleeding depletes iron. Include leafy greens, legumes, red meat or fortified cereals, paired with vitamin C.",
            ),
            CONSULT_PROVIDER,
        ],
        Pattern::Pain => &[
            (
                "Pain Management",
                "Over-the-counter anti-inflammatories taken at the first sign of pain are usually more effective than waiting.",
            ),
            (
                "Heat Therapy",
                "A heating pad or warm bath relaxes uterine muscles and can relieve cramping.",
            ),
            CONSULT_PROVIDER,
        ],
        Pattern::Developing => &[
            (
                "Be Patient With Your Body",
                "Cycles often take several years after the first period to settle into a regular rhythm.",
            ),
            TRACK_YOUR_CYCLE,
            (
                "Talk to a Trusted Adult",
                "A parent, school nurse or doctor can answer questions and help if anything feels worrying.",
            ),
        ],
    }
}

fn symptom_entry(symptom: &str) -> Option<(&'static str, &'static str)> {
    match symptom {
        "Fatigue" => Some((
            "Manage Fatigue",
            "Prioritize sleep, stay hydrated and keep iron intake up during your period to reduce tiredness.",
        )),
        "Bloating" => Some((
            "Reduce Bloating",
            "Cutting back on salt, caffeine and carbonated drinks in the days before your period can limit water retention.",
        )),
        "Headache" => Some((
            "Headache Relief",
            "Regular meals, hydration and consistent sleep help prevent hormone-related headaches.",
        )),
        "Mood swings" => Some((
            "Emotional Support",
            "Mood changes across the cycle are common; journaling and talking with people you trust can help.",
        )),
        "Anxiety" => Some((
            "Relaxation Techniques",
            "Breathing exercises, meditation or gentle stretching can calm premenstrual anxiety.",
        )),
        "Sleep disturbances" => Some((
            "Improve Sleep Hygiene",
            "Keep a consistent bedtime, limit screens before sleep and keep your room cool.",
        )),
        _ => None,
    }
}

/// The fixed base sequence for a pattern.
pub fn base_recommendations(pattern: Pattern) -> Vec<Recommendation> {
    base_entries(pattern)
        .iter()
        .map(|(title, description)| Recommendation::new(*title, *description))
        .collect()
}

/// Expands a pattern into its ordered recommendations for this input.
///
/// Idempotent: the same `(pattern, input)` always yields the same sequence.
pub fn recommend(pattern: Pattern, input: &AssessmentInput) -> Vec<Recommendation> {
    let mut recommendations = base_recommendations(pattern);

    for symptom in input.all_symptoms() {
        if let Some((title, description)) = symptom_entry(symptom) {
            if recommendations.iter().all(|r| r.title != title) {
                recommendations.push(Recommendation::new(title, description));
            }
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::SymptomCategory;

    fn titles(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn regular_without_symptoms_is_exactly_the_base_sequence() {
        let result = recommend(Pattern::Regular, &AssessmentInput::new());
        assert_eq!(titles(&result), vec!["Track Your Cycle", "Exercise Regularly"]);
    }

    #[test]
    fn every_pattern_has_a_non_empty_base() {
        for pattern in Pattern::all() {
            assert!(!base_recommendations(*pattern).is_empty(), "{}", pattern);
        }
    }

    #[test]
    fn fatigue_appends_after_base() {
        let mut input = AssessmentInput::new();
        input.set_symptoms(SymptomCategory::Physical, ["Fatigue"].into_iter().collect());

        let result = recommend(Pattern::Regular, &input);

        assert_eq!(
            titles(&result),
            vec!["Track Your Cycle", "Exercise Regularly", "Manage Fatigue"]
        );
    }

    #[test]
    fn appended_entries_follow_recording_order() {
        let mut input = AssessmentInput::new();
        input.set_symptoms(
            SymptomCategory::Physical,
            ["Headache", "Cramps", "Bloating"].into_iter().collect(),
        );
        input.set_symptoms(SymptomCategory::Emotional, ["Anxiety"].into_iter().collect());
        input.set_symptoms(
            SymptomCategory::Other,
            ["Sleep disturbances"].into_iter().collect(),
        );

        let result = recommend(Pattern::Pain, &input);

        assert_eq!(
            titles(&result),
            vec![
                "Pain Management",
                "Heat Therapy",
                "Consult a Healthcare Provider",
                "Headache Relief",
                "Reduce Bloating",
                "Relaxation Techniques",
                "Improve Sleep Hygiene",
            ]
        );
    }

    #[test]
    fn untriggering_symptoms_add_nothing() {
        let mut input = AssessmentInput::new();
        input.set_symptoms(SymptomCategory::Physical, ["Acne", "Nausea"].into_iter().collect());
        assert_eq!(recommend(Pattern::Heavy, &input), base_recommendations(Pattern::Heavy));
    }

    #[test]
    fn recommend_is_idempotent() {
        let mut input = AssessmentInput::new();
        input.set_symptoms(SymptomCategory::Emotional, ["Mood swings"].into_iter().collect());
        assert_eq!(
            recommend(Pattern::Developing, &input),
            recommend(Pattern::Developing, &input)
        );
    }
}
