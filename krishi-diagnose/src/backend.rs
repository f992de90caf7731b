//! Image analysis backend
//!
//! The service ships with [`SimulatedBackend`], which waits a configured delay
//! and returns a fixed diagnosis. A real classifier plugs in behind the same
//! trait.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::error::AnalysisError;
use crate::models::{DiagnosisPayload, UploadedImage};

#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    async fn analyze(&self, image: &UploadedImage) -> Result<DiagnosisPayload, AnalysisError>;
}

/// Constant-result backend
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl AnalysisBackend for SimulatedBackend {
    fn name(&self) -> &'static str {
        "SimulatedBackend"
    }

    async fn analyze(&self, image: &UploadedImage) -> Result<DiagnosisPayload, AnalysisError> {
        debug!(
            mime_type = image.mime_type(),
            latency_ms = self.latency.as_millis() as u64,
            "Simulated analysis"
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(DiagnosisPayload::leaf_spot_sample())
    }
}
