//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status ("ok")
    pub status: String,
    /// Module name ("krishi-diagnose")
    pub module: String,
    /// Crate version from Cargo.toml
    pub version: String,
    /// Short git revision the binary was built from
    pub git_hash: String,
    /// Seconds since service started
    pub uptime_seconds: u64,
    /// Workflow instances currently open
    pub active_workflows: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now().signed_duration_since(state.startup_time);
    let uptime_seconds = uptime.num_seconds().max(0) as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        module: "krishi-diagnose".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: env!("KRISHI_GIT_HASH").to_string(),
        uptime_seconds,
        active_workflows: state.registry.count().await,
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
