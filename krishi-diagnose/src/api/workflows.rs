//! Workflow lifecycle and diagnosis stage handlers
//!
//! POST /workflows, GET/DELETE /workflows/:id, POST /workflows/:id/image,
//! POST /workflows/:id/diagnosis/reset

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use super::apply;
use crate::error::{ApiResult, WorkflowError};
use crate::intake::{encode_data_uri, Accept};
use crate::workflow::{WorkflowAction, WorkflowSnapshot};
use crate::AppState;

/// Content type declared by the client, if any
pub(crate) fn declared_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
}

/// POST /workflows
///
/// Open a new workflow in the upload stage. Returns 201 with the snapshot.
pub async fn create_workflow(
    State(state): State<AppState>,
) -> (StatusCode, Json<WorkflowSnapshot>) {
    let snapshot = state.registry.create().await;
    (StatusCode::CREATED, Json(snapshot))
}

/// GET /workflows/:id
pub async fn get_workflow(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
) -> ApiResult<Json<WorkflowSnapshot>> {
    Ok(Json(state.registry.snapshot(workflow_id).await?))
}

/// DELETE /workflows/:id
///
/// Tear the workflow down. A running progress timer is cancelled.
pub async fn delete_workflow(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.registry.close(workflow_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /workflows/:id/image
///
/// Raw image bytes in the body. An empty body means no file was chosen and
/// leaves the workflow untouched.
pub async fn submit_image(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<WorkflowSnapshot>> {
    let image = encode_data_uri(&body, declared_type(&headers), Accept::CropPhoto)
        .map_err(WorkflowError::from)?;
    tracing::debug!(
        workflow_id = %workflow_id,
        bytes = body.len(),
        "Crop photo received"
    );
    apply(&state, workflow_id, WorkflowAction::SubmitImage(image)).await
}

/// POST /workflows/:id/diagnosis/reset
pub async fn reset_diagnosis(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
) -> ApiResult<Json<WorkflowSnapshot>> {
    apply(&state, workflow_id, WorkflowAction::ResetDiagnosis).await
}

/// Build workflow routes
pub fn workflow_routes() -> Router<AppState> {
    Router::new()
        .route("/workflows", post(create_workflow))
        .route("/workflows/:id", get(get_workflow).delete(delete_workflow))
        .route("/workflows/:id/image", post(submit_image))
        .route("/workflows/:id/diagnosis/reset", post(reset_diagnosis))
        .route("/workflows/:id/events", get(super::sse::workflow_event_stream))
}
