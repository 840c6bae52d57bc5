//! HTTP DTOs for stored assessments.

use serde::Serialize;

use crate::adapters::http::wizard::dto::RecommendationResponse;
use crate::domain::assessment::Assessment;

/// A stored assessment in the flattened wire shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub id: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub age: String,
    pub cycle_length: String,
    pub period_duration: String,
    pub flow_heaviness: String,
    pub pain_level: String,
    pub physical_symptoms: Vec<String>,
    pub emotional_symptoms: Vec<String>,
    pub other_symptoms: Vec<String>,
    pub pattern: String,
    pub pattern_name: String,
    pub recommendations: Vec<RecommendationResponse>,
}

impl From<&Assessment> for AssessmentResponse {
    fn from(assessment: &Assessment) -> Self {
        let record = assessment.record();
        Self {
            id: assessment.id().to_string(),
            user_id: assessment.user_id().to_string(),
            created_at: assessment.created_at().to_rfc3339(),
            updated_at: assessment.updated_at().to_rfc3339(),
            age: record.age.clone(),
            cycle_length: record.cycle_length.clone(),
            period_duration: record.period_duration.clone(),
            flow_heaviness: record.flow_heaviness.clone(),
            pain_level: record.pain_level.clone(),
            physical_symptoms: record.physical_symptoms.as_slice().to_vec(),
            emotional_symptoms: record.emotional_symptoms.as_slice().to_vec(),
            other_symptoms: record.other_symptoms.as_slice().to_vec(),
            pattern: record.pattern.as_str().to_string(),
            pattern_name: record.pattern.display_name().to_string(),
            recommendations: record.recommendations.iter().map(Into::into).collect(),
        }
    }
}

/// A user's assessment history, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentListResponse {
    pub items: Vec<AssessmentResponse>,
    pub total: usize,
}

impl From<Vec<Assessment>> for AssessmentListResponse {
    fn from(assessments: Vec<Assessment>) -> Self {
        Self {
            total: assessments.len(),
            items: assessments.iter().map(Into::into).collect(),
        }
    }
}
