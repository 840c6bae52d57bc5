//! Wires application handlers into the `/api` router.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use super::assessment::{assessment_routes, AssessmentHandlers};
use super::wizard::{wizard_routes, WizardHandlers};
use crate::application::handlers::{
    CompleteAssessmentHandler, DeleteAssessmentHandler, GetAssessmentHandler,
    GetWizardStateHandler, GoBackHandler, ListAssessmentsHandler, PreviewResultsHandler,
    ReviseAssessmentHandler, StartWizardHandler, SubmitStepHandler,
};
use crate::domain::assessment::Classifier;
use crate::ports::{AssessmentRepository, SessionStore};

/// Builds the full API router over the given collaborators.
pub fn api_router(
    store: Arc<dyn SessionStore>,
    repository: Arc<dyn AssessmentRepository>,
    classifier: Arc<Classifier>,
) -> Router {
    let wizard = WizardHandlers::new(
        Arc::new(StartWizardHandler::new(store.clone())),
        Arc::new(SubmitStepHandler::new(store.clone())),
        Arc::new(GoBackHandler::new(store.clone())),
        Arc::new(GetWizardStateHandler::new(store.clone())),
        Arc::new(PreviewResultsHandler::new(store.clone(), classifier.clone())),
        Arc::new(CompleteAssessmentHandler::new(
            store.clone(),
            repository.clone(),
            classifier,
        )),
    );

    let assessments = AssessmentHandlers::new(
        Arc::new(GetAssessmentHandler::new(repository.clone())),
        Arc::new(ListAssessmentsHandler::new(repository.clone())),
        Arc::new(DeleteAssessmentHandler::new(repository.clone())),
        Arc::new(ReviseAssessmentHandler::new(repository, store)),
    );

    Router::new()
        .nest("/api/wizard", wizard_routes(wizard))
        .nest("/api/assessments", assessment_routes(assessments))
        .layer(TraceLayer::new_for_http())
}
