//! HTTP routes for stored assessments.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    delete_assessment, get_assessment, list_assessments, revise_assessment, AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", get(list_assessments))
        .route("/:id", get(get_assessment).delete(delete_assessment))
        .route("/:id/revise", post(revise_assessment))
        .with_state(handlers)
}
