//! GetAssessmentHandler - Query handler for one stored assessment.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::{AssessmentId, UserId};
use crate::ports::AssessmentRepository;

/// Query to retrieve an assessment by ID.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub user_id: UserId,
    pub assessment_id: AssessmentId,
}

pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAssessmentQuery) -> Result<Assessment, AssessmentError> {
        load_owned(self.repository.as_ref(), &query.user_id, query.assessment_id).await
    }
}

/// Fetches an assessment and checks that `user_id` owns it.
pub(crate) async fn load_owned(
    repository: &dyn AssessmentRepository,
    user_id: &UserId,
    assessment_id: AssessmentId,
) -> Result<Assessment, AssessmentError> {
    let assessment = repository
        .get(&assessment_id)
        .await?
        .ok_or(AssessmentError::NotFound(assessment_id))?;
    assessment.authorize(user_id)?;
    Ok(assessment)
}
