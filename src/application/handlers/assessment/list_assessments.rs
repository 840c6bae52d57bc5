//! ListAssessmentsHandler - a user's assessment history.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::UserId;
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone)]
pub struct ListAssessmentsQuery {
    pub user_id: UserId,
}

pub struct ListAssessmentsHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl ListAssessmentsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    /// Returns the user's assessments, newest first.
    pub async fn handle(&self, query: ListAssessmentsQuery) -> Result<Vec<Assessment>, AssessmentError> {
        Ok(self.repository.list(&query.user_id).await?)
    }
}
