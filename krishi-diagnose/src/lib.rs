//! krishi-diagnose library interface
//!
//! Crop photo diagnosis and soil health intake. Exposes the workflow engine
//! and the HTTP router for the binary and for integration tests.

pub mod api;
pub mod backend;
pub mod content;
pub mod error;
pub mod intake;
pub mod location;
pub mod models;
pub mod workflow;

pub use crate::error::{ApiError, ApiResult};

use axum::{extract::DefaultBodyLimit, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::location::LocationHierarchy;
use crate::workflow::WorkflowRegistry;
use krishi_common::context::UserContext;
use krishi_common::events::EventBus;

/// Largest accepted upload (crop photo or soil card)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Open workflow instances
    pub registry: WorkflowRegistry,
    /// Language preference and logged-in profile
    pub context: Arc<RwLock<UserContext>>,
    /// Event bus for SSE broadcasting
    pub event_bus: EventBus,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(registry: WorkflowRegistry, context: UserContext, event_bus: EventBus) -> Self {
        Self {
            registry,
            context: Arc::new(RwLock::new(context)),
            event_bus,
            startup_time: Utc::now(),
        }
    }

    pub fn hierarchy(&self) -> &Arc<LocationHierarchy> {
        self.registry.hierarchy()
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // UI routes (HTML pages)
        .merge(api::ui_routes())
        // API routes
        .merge(api::workflow_routes())
        .merge(api::soil_routes())
        .merge(api::location_routes())
        .merge(api::content_routes())
        .merge(api::session_routes())
        .merge(api::health_routes())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
