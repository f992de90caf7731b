//! Localized content lookup

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::content::{bundle, bundle_for, ContentBundle};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    pub lang: Option<String>,
}

/// GET /content?lang=xx
///
/// Without `lang` the session language is used. Unknown keys fall back to
/// English; this endpoint never fails.
pub async fn get_content(
    State(state): State<AppState>,
    Query(query): Query<ContentQuery>,
) -> Json<&'static ContentBundle> {
    let content = match query.lang {
        Some(key) => bundle_for(&key),
        None => bundle(state.context.read().await.language()),
    };
    Json(content)
}

/// Build content routes
pub fn content_routes() -> Router<AppState> {
    Router::new().route("/content", get(get_content))
}
