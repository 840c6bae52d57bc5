//! HTTP routes for wizard endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    complete_assessment, get_wizard, go_back, preview_results, start_wizard, submit_step,
    WizardHandlers,
};

/// Creates the wizard router with all endpoints.
pub fn wizard_routes(handlers: WizardHandlers) -> Router {
    Router::new()
        .route("/", post(start_wizard))
        .route("/:session_id", get(get_wizard))
        .route("/:session_id/submit", post(submit_step))
        .route("/:session_id/back", post(go_back))
        .route("/:session_id/preview", get(preview_results))
        .route("/:session_id/complete", post(complete_assessment))
        .with_state(handlers)
}
