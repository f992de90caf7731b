//! Static asset handlers for the diagnosis UI
//!
//! Embeds and serves CSS/JS files at compile time

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const KRISHI_UI_CSS: &str = include_str!("../../../static/krishi-ui.css");
const DIAGNOSE_JS: &str = include_str!("../../../static/diagnose.js");

/// GET /static/krishi-ui.css
pub async fn serve_krishi_ui_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        KRISHI_UI_CSS,
    )
        .into_response()
}

/// GET /static/diagnose.js
///
/// Action buttons, file inputs and the analysis progress listener
pub async fn serve_diagnose_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        DIAGNOSE_JS,
    )
        .into_response()
}
