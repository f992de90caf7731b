//! Diagnosis stage controller
//!
//! `UPLOAD → ANALYZING → RESULTS → UPLOAD`. The image lives only in the
//! analyzing and results states and progress only in analyzing, so a reset
//! cannot leave either behind.

use serde::Serialize;

use crate::error::StageError;
use crate::models::{DiagnosisPayload, UploadedImage};
use krishi_common::events::DiagnosisStage;

/// Progress value at which analysis is finished
pub const PROGRESS_COMPLETE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "lowercase")]
pub enum DiagnosisState {
    Upload {
        /// Set when the previous analysis failed
        notice: Option<String>,
    },
    Analyzing {
        image: UploadedImage,
        progress: f64,
    },
    Results {
        image: UploadedImage,
        payload: DiagnosisPayload,
    },
}

/// Stage change produced by a controller operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTransition {
    pub old_stage: DiagnosisStage,
    pub new_stage: DiagnosisStage,
}

/// Result of one progress tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Progress moved to the contained value, still below 100
    Advanced(f64),
    /// Progress reached exactly 100; the settle delay starts now
    Completed,
    /// Progress was already at 100
    Idle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisController {
    state: DiagnosisState,
}

impl Default for DiagnosisController {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosisController {
    pub fn new() -> Self {
        Self {
            state: DiagnosisState::Upload { notice: None },
        }
    }

    pub fn state(&self) -> &DiagnosisState {
        &self.state
    }

    pub fn stage(&self) -> DiagnosisStage {
        match self.state {
            DiagnosisState::Upload { .. } => DiagnosisStage::Upload,
            DiagnosisState::Analyzing { .. } => DiagnosisStage::Analyzing,
            DiagnosisState::Results { .. } => DiagnosisStage::Results,
        }
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        match &self.state {
            DiagnosisState::Upload { .. } => None,
            DiagnosisState::Analyzing { image, .. } | DiagnosisState::Results { image, .. } => {
                Some(image)
            }
        }
    }

    /// 0 in upload, 100 in results
    pub fn progress(&self) -> f64 {
        match self.state {
            DiagnosisState::Upload { .. } => 0.0,
            DiagnosisState::Analyzing { progress, .. } => progress,
            DiagnosisState::Results { .. } => PROGRESS_COMPLETE,
        }
    }

    pub fn payload(&self) -> Option<&DiagnosisPayload> {
        match &self.state {
            DiagnosisState::Results { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.state {
            DiagnosisState::Upload { notice } => notice.as_deref(),
            _ => None,
        }
    }

    fn transition_to(&mut self, new_state: DiagnosisState) -> StageTransition {
        let old_stage = self.stage();
        self.state = new_state;
        StageTransition {
            old_stage,
            new_stage: self.stage(),
        }
    }

    /// Start analysis of `image`
    ///
    /// `None` (no file chosen) is a no-op. A second image while one is being
    /// analyzed is rejected, as is a new image while results are showing.
    pub fn submit_image(
        &mut self,
        image: Option<UploadedImage>,
    ) -> Result<Option<StageTransition>, StageError> {
        match self.state {
            DiagnosisState::Analyzing { .. } => return Err(StageError::AnalysisInProgress),
            DiagnosisState::Results { .. } => return Err(StageError::ResultsPending),
            DiagnosisState::Upload { .. } => {}
        }
        let Some(image) = image else {
            return Ok(None);
        };
        Ok(Some(self.transition_to(DiagnosisState::Analyzing {
            image,
            progress: 0.0,
        })))
    }

    /// Advance progress by `increment`, clamping at 100
    ///
    /// Negative increments are treated as zero so progress never decreases.
    pub fn tick(&mut self, increment: f64) -> Result<TickOutcome, StageError> {
        let DiagnosisState::Analyzing { progress, .. } = &mut self.state else {
            return Err(StageError::NotAnalyzing);
        };
        if *progress >= PROGRESS_COMPLETE {
            return Ok(TickOutcome::Idle);
        }
        let next = *progress + increment.max(0.0);
        if next >= PROGRESS_COMPLETE {
            *progress = PROGRESS_COMPLETE;
            Ok(TickOutcome::Completed)
        } else {
            *progress = next;
            Ok(TickOutcome::Advanced(next))
        }
    }

    /// Move to results once progress has reached 100
    pub fn complete(&mut self, payload: DiagnosisPayload) -> Result<StageTransition, StageError> {
        let image = match &self.state {
            DiagnosisState::Analyzing { image, progress } if *progress >= PROGRESS_COMPLETE => {
                image.clone()
            }
            DiagnosisState::Analyzing { progress, .. } => {
                return Err(StageError::ProgressIncomplete(*progress))
            }
            _ => return Err(StageError::NotAnalyzing),
        };
        Ok(self.transition_to(DiagnosisState::Results { image, payload }))
    }

    /// Backend failure: drop the image and go back to upload with a notice
    pub fn fail(&mut self, message: impl Into<String>) -> Result<StageTransition, StageError> {
        if !matches!(self.state, DiagnosisState::Analyzing { .. }) {
            return Err(StageError::NotAnalyzing);
        }
        Ok(self.transition_to(DiagnosisState::Upload {
            notice: Some(message.into()),
        }))
    }

    /// Results → upload, clearing image and progress
    pub fn reset(&mut self) -> Result<StageTransition, StageError> {
        if !matches!(self.state, DiagnosisState::Results { .. }) {
            return Err(StageError::NotInResults);
        }
        Ok(self.transition_to(DiagnosisState::Upload { notice: None }))
    }
}
