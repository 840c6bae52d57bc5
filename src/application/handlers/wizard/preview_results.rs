//! PreviewResultsHandler - pattern and recommendations without persisting.

use std::sync::Arc;

use super::errors::WizardFlowError;
use super::wizard_store;
use crate::domain::assessment::{recommend, AssessmentError, Classifier, Pattern, Recommendation};
use crate::domain::foundation::WizardSessionId;
use crate::ports::SessionStore;

#[derive(Debug, Clone)]
pub struct PreviewResultsQuery {
    pub session_id: WizardSessionId,
}

/// What the results screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResults {
    pub pattern: Pattern,
    pub recommendations: Vec<Recommendation>,
}

/// Pure query: classification and recommendation run on every call and
/// nothing is written.
pub struct PreviewResultsHandler {
    store: Arc<dyn SessionStore>,
    classifier: Arc<Classifier>,
}

impl PreviewResultsHandler {
    pub fn new(store: Arc<dyn SessionStore>, classifier: Arc<Classifier>) -> Self {
        Self { store, classifier }
    }

    pub async fn handle(&self, query: PreviewResultsQuery) -> Result<PreviewResults, WizardFlowError> {
        let state = wizard_store::load_or_start(self.store.as_ref(), query.session_id, None).await?;
        let input = state.input();

        let missing = input.missing_required();
        if !missing.is_empty() {
            return Err(AssessmentError::incomplete(missing).into());
        }

        let pattern = self.classifier.classify(input);
        Ok(PreviewResults {
            pattern,
            recommendations: recommend(pattern, input),
        })
    }
}
