//! Server-Sent Events for workflow progress

use axum::{
    extract::{Path, State},
    response::sse::{Event, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use uuid::Uuid;

use crate::error::{ApiResult, WorkflowError};
use crate::AppState;
use krishi_common::events::KrishiEvent;
use krishi_common::sse::create_event_sse_stream;

/// GET /workflows/:id/events
///
/// Streams this workflow's events plus service-wide language changes:
/// - DiagnosisStageChanged
/// - AnalysisProgress
/// - SoilPathChosen / SoilDataLoaded / SoilDataReset
/// - WorkflowClosed (last event on the stream)
/// - LanguageChanged
pub async fn workflow_event_stream(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    if !state.registry.contains(workflow_id).await {
        return Err(WorkflowError::NotFound(workflow_id).into());
    }

    Ok(create_event_sse_stream(
        "krishi-diagnose",
        &state.event_bus,
        move |event| match event.workflow_id() {
            Some(id) => id == workflow_id,
            None => matches!(event, KrishiEvent::LanguageChanged { .. }),
        },
    ))
}
