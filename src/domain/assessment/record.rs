//! Assessment records and the assembler.
//!
//! [`assemble`] is the only way to build a [`NewAssessment`]: it guards
//! completeness, classifies, expands recommendations and attaches the
//! owner. The persistence collaborator turns a `NewAssessment` into a
//! saved [`Assessment`] by assigning `id`, `createdAt` and `updatedAt`.

use serde::{Deserialize, Serialize};

use super::classifier::Classifier;
use super::errors::AssessmentError;
use super::input::AssessmentInput;
use super::recommendations::{recommend, Recommendation};
use super::symptoms::SymptomSet;
use super::Pattern;
use crate::domain::foundation::{AssessmentId, Timestamp, UserId};

/// A finished but not yet persisted assessment.
///
/// Serializes to the flattened wire shape (camelCase, top-level fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    pub user_id: UserId,
    pub age: String,
    pub cycle_length: String,
    pub period_duration: String,
    pub flow_heaviness: String,
    pub pain_level: String,
    pub physical_symptoms: SymptomSet,
    pub emotional_symptoms: SymptomSet,
    pub other_symptoms: SymptomSet,
    pub pattern: Pattern,
    pub recommendations: Vec<Recommendation>,
}

impl NewAssessment {
    /// The observations this record was built from.
    pub fn input(&self) -> AssessmentInput {
        AssessmentInput {
            age: Some(self.age.clone()),
            cycle_length: Some(self.cycle_length.clone()),
            period_duration: Some(self.period_duration.clone()),
            flow_heaviness: Some(self.flow_heaviness.clone()),
            pain_level: Some(self.pain_level.clone()),
            physical_symptoms: self.physical_symptoms.clone(),
            emotional_symptoms: self.emotional_symptoms.clone(),
            other_symptoms: self.other_symptoms.clone(),
        }
    }
}

/// A persisted assessment. Immutable once created; edits start a new wizard run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    id: AssessmentId,
    #[serde(flatten)]
    record: NewAssessment,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Assessment {
    /// Reconstitute a saved record (used by persistence adapters).
    pub fn reconstitute(
        id: AssessmentId,
        record: NewAssessment,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            record,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.record.user_id
    }

    pub fn record(&self) -> &NewAssessment {
        &self.record
    }

    pub fn pattern(&self) -> Pattern {
        self.record.pattern
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.record.recommendations
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        self.user_id() == user_id
    }

    /// Validates that the user can access this assessment.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if user is not the owner
    pub fn authorize(&self, user_id: &UserId) -> Result<(), AssessmentError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(AssessmentError::Forbidden)
        }
    }
}

/// Builds the unsaved record for a completed input.
///
/// # Errors
///
/// - `IncompleteInput` if any of age, cycle length, period duration, flow
///   or pain level is unset. Symptom sets may be empty.
pub fn assemble(
    input: AssessmentInput,
    user_id: UserId,
    classifier: &Classifier,
) -> Result<NewAssessment, AssessmentError> {
    let missing = input.missing_required();
    if !missing.is_empty() {
        return Err(AssessmentError::incomplete(missing));
    }

    let pattern = classifier.classify(&input);
    let recommendations = recommend(pattern, &input);

    match input {
        AssessmentInput {
            age: Some(age),
            cycle_length: Some(cycle_length),
            period_duration: Some(period_duration),
            flow_heaviness: Some(flow_heaviness),
            pain_level: Some(pain_level),
            physical_symptoms,
            emotional_symptoms,
            other_symptoms,
        } => Ok(NewAssessment {
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
        }),
        incomplete => Err(AssessmentError::incomplete(incomplete.missing_required())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AssessmentField, SymptomCategory};
    use serde_json::json;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn complete_input() -> AssessmentInput {
        let mut input = AssessmentInput::new();
        input.set(AssessmentField::Age, "18-24");
        input.set(AssessmentField::CycleLength, "26-30");
        input.set(AssessmentField::PeriodDuration, "4-5");
        input.set(AssessmentField::FlowHeaviness, "moderate");
        input.set(AssessmentField::PainLevel, "mild");
        input.set_symptoms(SymptomCategory::Physical, ["Fatigue"].into_iter().collect());
        input
    }

    #[test]
    fn assemble_classifies_and_recommends() {
        let record = assemble(complete_input(), user(), &Classifier::default()).unwrap();

        assert_eq!(record.pattern, Pattern::Regular);
        assert_eq!(record.recommendations.len(), 3);
        assert_eq!(record.recommendations[2].title, "Manage Fatigue");
        assert_eq!(record.user_id, user());
    }

    #[test]
    fn assemble_fails_when_pain_level_unset() {
        let mut input = complete_input();
        input.pain_level = None;

        let err = assemble(input, user(), &Classifier::default()).unwrap_err();

        assert_eq!(
            err,
            AssessmentError::IncompleteInput {
                missing: vec![AssessmentField::PainLevel]
            }
        );
    }

    #[test]
    fn assemble_allows_empty_symptom_sets() {
        let mut input = complete_input();
        input.physical_symptoms = SymptomSet::new();
        assert!(assemble(input, user(), &Classifier::default()).is_ok());
    }

    #[test]
    fn new_assessment_input_round_trips() {
        let input = complete_input();
        let record = assemble(input.clone(), user(), &Classifier::default()).unwrap();
        assert_eq!(record.input(), input);
    }

    #[test]
    fn assessment_serializes_flattened() {
        let record = assemble(complete_input(), user(), &Classifier::default()).unwrap();
        let saved = Assessment::reconstitute(
            AssessmentId::new(),
            record,
            Timestamp::now(),
            Timestamp::now(),
        );

        let json = serde_json::to_value(&saved).unwrap();

        assert!(json["id"].is_string());
        assert_eq!(json["userId"], json!("user-1"));
        assert_eq!(json["cycleLength"], json!("26-30"));
        assert_eq!(json["pattern"], json!("regular"));
        assert!(json["createdAt"].is_string());
        assert!(json.get("record").is_none());
    }

    #[test]
    fn authorize_rejects_other_users() {
        let record = assemble(complete_input(), user(), &Classifier::default()).unwrap();
        let saved = Assessment::reconstitute(
            AssessmentId::new(),
            record,
            Timestamp::now(),
            Timestamp::now(),
        );
        let stranger = UserId::new("user-2").unwrap();

        assert!(saved.authorize(&user()).is_ok());
        assert_eq!(saved.authorize(&stranger), Err(AssessmentError::Forbidden));
    }
}
