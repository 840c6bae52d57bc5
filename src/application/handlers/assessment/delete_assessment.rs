//! DeleteAssessmentHandler - removes one of the user's assessments.

use std::sync::Arc;

use super::get_assessment::load_owned;
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::{AssessmentId, UserId};
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone)]
pub struct DeleteAssessmentCommand {
    pub user_id: UserId,
    pub assessment_id: AssessmentId,
}

pub struct DeleteAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl DeleteAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteAssessmentCommand) -> Result<(), AssessmentError> {
        // 1. Ownership check before touching anything
        load_owned(self.repository.as_ref(), &cmd.user_id, cmd.assessment_id).await?;

        // 2. Delete
        self.repository.delete(&cmd.user_id, &cmd.assessment_id).await?;

        tracing::info!(assessment_id = %cmd.assessment_id, "Assessment deleted");
        Ok(())
    }
}
