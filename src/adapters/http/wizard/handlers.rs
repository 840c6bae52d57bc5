//! HTTP handlers for wizard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::assessment::dto::AssessmentResponse;
use crate::adapters::http::error::{handle_wizard_flow_error, ErrorResponse};
use crate::adapters::http::middleware::RequireUser;
use crate::application::handlers::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, GetWizardStateHandler,
    GetWizardStateQuery, GoBackCommand, GoBackHandler, PreviewResultsHandler, PreviewResultsQuery,
    StartWizardCommand, StartWizardHandler, SubmitStepCommand, SubmitStepHandler,
};
use crate::domain::foundation::WizardSessionId;

use super::dto::{PreviewResponse, QuickParams, SubmitStepRequest, WizardStateResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WizardHandlers {
    start_handler: Arc<StartWizardHandler>,
    submit_handler: Arc<SubmitStepHandler>,
    back_handler: Arc<GoBackHandler>,
    get_handler: Arc<GetWizardStateHandler>,
    preview_handler: Arc<PreviewResultsHandler>,
    complete_handler: Arc<CompleteAssessmentHandler>,
}

impl WizardHandlers {
    pub fn new(
        start_handler: Arc<StartWizardHandler>,
        submit_handler: Arc<SubmitStepHandler>,
        back_handler: Arc<GoBackHandler>,
        get_handler: Arc<GetWizardStateHandler>,
        preview_handler: Arc<PreviewResultsHandler>,
        complete_handler: Arc<CompleteAssessmentHandler>,
    ) -> Self {
        Self {
            start_handler,
            submit_handler,
            back_handler,
            get_handler,
            preview_handler,
            complete_handler,
        }
    }
}

fn parse_session_id(raw: &str) -> Result<WizardSessionId, Response> {
    raw.parse::<WizardSessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid wizard session ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/wizard - Start a wizard session
pub async fn start_wizard(
    State(handlers): State<WizardHandlers>,
    Query(params): Query<QuickParams>,
) -> Response {
    let cmd = StartWizardCommand {
        quick_response: params.quick.unwrap_or(false),
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(state) => (StatusCode::CREATED, Json(WizardStateResponse::from(&state))).into_response(),
        Err(e) => handle_wizard_flow_error(e),
    }
}

/// GET /api/wizard/:session_id - Current step view
pub async fn get_wizard(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
    Query(params): Query<QuickParams>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetWizardStateQuery {
        session_id,
        quick_response: params.quick,
    };

    match handlers.get_handler.handle(query).await {
        Ok(state) => (StatusCode::OK, Json(WizardStateResponse::from(&state))).into_response(),
        Err(e) => handle_wizard_flow_error(e),
    }
}

/// POST /api/wizard/:session_id/submit - Record the current step and advance
pub async fn submit_step(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
    Query(params): Query<QuickParams>,
    Json(req): Json<SubmitStepRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitStepCommand {
        session_id,
        value: req.into(),
        quick_response: params.quick,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(state) => (StatusCode::OK, Json(WizardStateResponse::from(&state))).into_response(),
        Err(e) => handle_wizard_flow_error(e),
    }
}

/// POST /api/wizard/:session_id/back - Return to the previous step
pub async fn go_back(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
    Query(params): Query<QuickParams>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = GoBackCommand {
        session_id,
        quick_response: params.quick,
    };

    match handlers.back_handler.handle(cmd).await {
        Ok(state) => (StatusCode::OK, Json(WizardStateResponse::from(&state))).into_response(),
        Err(e) => handle_wizard_flow_error(e),
    }
}

/// GET /api/wizard/:session_id/preview - Pattern and recommendations, not saved
pub async fn preview_results(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .preview_handler
        .handle(PreviewResultsQuery { session_id })
        .await
    {
        Ok(preview) => (StatusCode::OK, Json(PreviewResponse::from(preview))).into_response(),
        Err(e) => handle_wizard_flow_error(e),
    }
}

/// POST /api/wizard/:session_id/complete - Store the finished assessment
pub async fn complete_assessment(
    State(handlers): State<WizardHandlers>,
    RequireUser(user_id): RequireUser,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CompleteAssessmentCommand {
        session_id,
        user_id,
    };

    match handlers.complete_handler.handle(cmd).await {
        Ok(saved) => (StatusCode::CREATED, Json(AssessmentResponse::from(&saved))).into_response(),
        Err(e) => handle_wizard_flow_error(e),
    }
}
