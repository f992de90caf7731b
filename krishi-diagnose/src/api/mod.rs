//! HTTP API handlers for krishi-diagnose
//!
//! Every workflow mutation is a POST that dispatches one action and returns
//! the new workflow snapshot. Progress is pushed over SSE.

pub mod content;
pub mod health;
pub mod locations;
pub mod session;
pub mod soil;
pub mod sse;
pub mod ui;
pub mod workflows;

pub use content::content_routes;
pub use health::health_routes;
pub use locations::location_routes;
pub use session::session_routes;
pub use soil::soil_routes;
pub use ui::ui_routes;
pub use workflows::workflow_routes;

use axum::Json;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::workflow::{WorkflowAction, WorkflowSnapshot};
use crate::AppState;

/// Dispatch one action and return the resulting snapshot
pub(crate) async fn apply(
    state: &AppState,
    workflow_id: Uuid,
    action: WorkflowAction,
) -> ApiResult<Json<WorkflowSnapshot>> {
    let snapshot = state.registry.dispatch(workflow_id, action).await?;
    Ok(Json(snapshot))
}
