//! Standard error body and status mapping shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::application::handlers::WizardFlowError;
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::ErrorCode;
use crate::domain::wizard::{WizardError, WizardStep};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }
}

/// Maps a wizard or revision failure to a response.
pub fn handle_wizard_flow_error(error: WizardFlowError) -> Response {
    match error {
        WizardFlowError::Wizard(e) => handle_wizard_error(e),
        WizardFlowError::Assessment(e) => handle_assessment_error(e),
        WizardFlowError::Store(e) => {
            tracing::error!(error = %e, "Session store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    ErrorCode::SessionStoreError,
                    "Wizard state could not be read or written",
                )),
            )
                .into_response()
        }
    }
}

fn handle_wizard_error(error: WizardError) -> Response {
    let status = match &error {
        WizardError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        WizardError::AlreadyComplete | WizardError::NotFinished { .. } => StatusCode::CONFLICT,
    };
    let mut body = ErrorResponse::new(error.code(), error.to_string());
    match &error {
        WizardError::Validation { step, source } => {
            body = body.with_details(json!({
                "step": step.slug(),
                "field": source.field(),
            }));
        }
        WizardError::NotFinished { step } => {
            body = body.with_details(json!({ "current_step": step.slug() }));
        }
        WizardError::AlreadyComplete => {}
    }
    (status, Json(body)).into_response()
}

/// Maps an assessment failure to a response.
pub fn handle_assessment_error(error: AssessmentError) -> Response {
    let code = error.code();
    match &error {
        AssessmentError::InvalidShape { .. } | AssessmentError::Validation(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(code, error.to_string())),
        )
            .into_response(),
        AssessmentError::IncompleteInput { missing } => {
            let first_unset_step = error
                .first_missing()
                .map(|field| WizardStep::for_field(field).slug());
            let missing: Vec<&str> = missing.iter().map(|f| f.wire_name()).collect();
            (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(code, error.to_string()).with_details(json!({
                    "first_unset_step": first_unset_step,
                    "missing": missing,
                }))),
            )
                .into_response()
        }
        AssessmentError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(code, format!("Assessment not found: {}", id))),
        )
            .into_response(),
        AssessmentError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new(code, error.to_string())),
        )
            .into_response(),
        AssessmentError::Persistence(e) => {
            tracing::error!(error = %e, "Persistence API failure");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(code, e.to_string())),
            )
                .into_response()
        }
    }
}
