//! Soil acquisition handlers
//!
//! All under /workflows/:id/soil. Each maps onto one workflow action.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use super::{apply, workflows::declared_type};
use crate::error::{ApiError, ApiResult, WorkflowError};
use crate::intake::{encode_data_uri, Accept};
use crate::location::LocationLevel;
use crate::models::SoilParameter;
use crate::workflow::{WorkflowAction, WorkflowSnapshot};
use crate::AppState;

/// POST /soil/path request
#[derive(Debug, Deserialize)]
pub struct ChoosePathRequest {
    pub has_card: bool,
}

/// POST /soil/location request
#[derive(Debug, Deserialize)]
pub struct SetLocationRequest {
    pub level: LocationLevel,
    /// Empty string clears the level
    #[serde(default)]
    pub value: String,
}

/// POST /soil/manual/field request
#[derive(Debug, Deserialize)]
pub struct ManualFieldRequest {
    /// Parameter key, e.g. "organic_carbon"
    pub parameter: String,
    #[serde(default)]
    pub value: String,
}

pub async fn choose_path(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
    Json(request): Json<ChoosePathRequest>,
) -> ApiResult<Json<WorkflowSnapshot>> {
    apply(
        &state,
        workflow_id,
        WorkflowAction::ChoosePath {
            has_card: request.has_card,
        },
    )
    .await
}

/// POST /workflows/:id/soil/card
///
/// Raw image or PDF bytes; empty body is a no-op
pub async fn upload_card(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<WorkflowSnapshot>> {
    let card = encode_data_uri(&body, declared_type(&headers), Accept::SoilCard)
        .map_err(WorkflowError::from)?;
    apply(&state, workflow_id, WorkflowAction::UploadCard(card)).await
}

pub async fn set_location(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
    Json(request): Json<SetLocationRequest>,
) -> ApiResult<Json<WorkflowSnapshot>> {
    apply(
        &state,
        workflow_id,
        WorkflowAction::SetLocation {
            level: request.level,
            value: request.value,
        },
    )
    .await
}

pub async fn confirm_reference(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
) -> ApiResult<Json<WorkflowSnapshot>> {
    apply(&state, workflow_id, WorkflowAction::ConfirmReference).await
}

pub async fn open_manual_entry(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
) -> ApiResult<Json<WorkflowSnapshot>> {
    apply(&state, workflow_id, WorkflowAction::OpenManualEntry).await
}

pub async fn cancel_manual_entry(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
) -> ApiResult<Json<WorkflowSnapshot>> {
    apply(&state, workflow_id, WorkflowAction::CancelManualEntry).await
}

pub async fn set_manual_field(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
    Json(request): Json<ManualFieldRequest>,
) -> ApiResult<Json<WorkflowSnapshot>> {
    let parameter = SoilParameter::from_key(&request.parameter).ok_or_else(|| {
        ApiError::BadRequest(format!("Unknown soil parameter: {}", request.parameter))
    })?;
    apply(
        &state,
        workflow_id,
        WorkflowAction::SetManualField {
            parameter,
            value: request.value,
        },
    )
    .await
}

pub async fn submit_manual(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
) -> ApiResult<Json<WorkflowSnapshot>> {
    apply(&state, workflow_id, WorkflowAction::SubmitManual).await
}

pub async fn reset_soil(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
) -> ApiResult<Json<WorkflowSnapshot>> {
    apply(&state, workflow_id, WorkflowAction::ResetSoil).await
}

/// Build soil acquisition routes
pub fn soil_routes() -> Router<AppState> {
    Router::new()
        .route("/workflows/:id/soil/path", post(choose_path))
        .route("/workflows/:id/soil/card", post(upload_card))
        .route("/workflows/:id/soil/location", post(set_location))
        .route("/workflows/:id/soil/reference", post(confirm_reference))
        .route("/workflows/:id/soil/manual/open", post(open_manual_entry))
        .route("/workflows/:id/soil/manual/cancel", post(cancel_manual_entry))
        .route("/workflows/:id/soil/manual/field", post(set_manual_field))
        .route("/workflows/:id/soil/manual/submit", post(submit_manual))
        .route("/workflows/:id/soil/reset", post(reset_soil))
}
