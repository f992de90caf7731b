//! UI Routes - server-rendered HTML for the diagnosis workflow
//!
//! - **Static Assets** (`static_assets`): CSS/JS file serving
//! - **Page** (`page`): the workflow page for the current stage and soil path
//!
//! The page is plain HTML. `diagnose.js` posts actions to the JSON API and
//! reloads; during analysis it follows the SSE stream.

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::content::{bundle, bundle_for};
use crate::error::ApiResult;
use crate::AppState;

mod page;
mod static_assets;

pub use page::render_page;
use static_assets::{serve_diagnose_js, serve_krishi_ui_css};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
}

/// GET /
///
/// Opens a fresh workflow and redirects to its page
async fn root_page(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.registry.create().await;
    Redirect::to(&format!("/workflows/{}/page", snapshot.workflow_id))
}

/// GET /workflows/:id/page
async fn workflow_page(
    State(state): State<AppState>,
    Path(workflow_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Html<String>> {
    let snapshot = state.registry.snapshot(workflow_id).await?;
    let context = state.context.read().await;
    let content = match query.lang.as_deref() {
        Some(key) => bundle_for(key),
        None => bundle(context.language()),
    };
    let greeting = context.user().map(|u| u.display_name());
    Ok(Html(render_page(content, &snapshot, greeting.as_deref())))
}

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        // Page routes
        .route("/", get(root_page))
        .route("/workflows/:id/page", get(workflow_page))
        // Static assets
        .route("/static/krishi-ui.css", get(serve_krishi_ui_css))
        .route("/static/diagnose.js", get(serve_diagnose_js))
}
