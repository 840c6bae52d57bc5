//! HTTP handlers for stored assessments.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_assessment_error, handle_wizard_flow_error, ErrorResponse};
use crate::adapters::http::middleware::RequireUser;
use crate::adapters::http::wizard::dto::{QuickParams, WizardStateResponse};
use crate::application::handlers::{
    DeleteAssessmentCommand, DeleteAssessmentHandler, GetAssessmentHandler, GetAssessmentQuery,
    ListAssessmentsHandler, ListAssessmentsQuery, ReviseAssessmentCommand, ReviseAssessmentHandler,
};
use crate::domain::foundation::AssessmentId;

use super::dto::{AssessmentListResponse, AssessmentResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    get_handler: Arc<GetAssessmentHandler>,
    list_handler: Arc<ListAssessmentsHandler>,
    delete_handler: Arc<DeleteAssessmentHandler>,
    revise_handler: Arc<ReviseAssessmentHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        get_handler: Arc<GetAssessmentHandler>,
        list_handler: Arc<ListAssessmentsHandler>,
        delete_handler: Arc<DeleteAssessmentHandler>,
        revise_handler: Arc<ReviseAssessmentHandler>,
    ) -> Self {
        Self {
            get_handler,
            list_handler,
            delete_handler,
            revise_handler,
        }
    }
}

fn parse_assessment_id(raw: &str) -> Result<AssessmentId, Response> {
    raw.parse::<AssessmentId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid assessment ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/assessments - The user's assessment history
pub async fn list_assessments(
    State(handlers): State<AssessmentHandlers>,
    RequireUser(user_id): RequireUser,
) -> Response {
    match handlers.list_handler.handle(ListAssessmentsQuery { user_id }).await {
        Ok(assessments) => {
            (StatusCode::OK, Json(AssessmentListResponse::from(assessments))).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/:id - One stored assessment
pub async fn get_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireUser(user_id): RequireUser,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetAssessmentQuery {
        user_id,
        assessment_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(assessment) => {
            (StatusCode::OK, Json(AssessmentResponse::from(&assessment))).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// DELETE /api/assessments/:id - Remove a stored assessment
pub async fn delete_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireUser(user_id): RequireUser,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteAssessmentCommand {
        user_id,
        assessment_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessments/:id/revise - Start a prefilled wizard from a stored assessment
pub async fn revise_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireUser(user_id): RequireUser,
    Path(assessment_id): Path<String>,
    Query(params): Query<QuickParams>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ReviseAssessmentCommand {
        user_id,
        assessment_id,
        quick_response: params.quick.unwrap_or(false),
    };

    match handlers.revise_handler.handle(cmd).await {
        Ok(state) => (StatusCode::CREATED, Json(WizardStateResponse::from(&state))).into_response(),
        Err(e) => handle_wizard_flow_error(e),
    }
}
