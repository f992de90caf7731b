//! Workflow registry
//!
//! Holds every open workflow instance by id. Each instance owns its shell and
//! at most one progress task; replacing or removing the instance drops the
//! task handle, which cancels the timer.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::progress::{AnalysisContext, AnalysisTask};
use super::shell::{Effect, WorkflowAction, WorkflowNotice, WorkflowShell, WorkflowView};
use crate::backend::AnalysisBackend;
use crate::error::WorkflowError;
use crate::location::LocationHierarchy;
use krishi_common::config::AnalysisConfig;
use krishi_common::events::{DiagnosisStage, EventBus, KrishiEvent, SoilPathKind};

/// JSON snapshot of one workflow
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowSnapshot {
    pub workflow_id: Uuid,
    pub stage: DiagnosisStage,
    pub progress: f64,
    pub soil_path: SoilPathKind,
    pub soil_loaded: bool,
    pub view: WorkflowView,
}

impl WorkflowSnapshot {
    pub(crate) fn capture(workflow_id: Uuid, shell: &WorkflowShell) -> Self {
        Self {
            workflow_id,
            stage: shell.stage(),
            progress: shell.diagnosis().progress(),
            soil_path: shell.soil().path(),
            soil_loaded: shell.soil().is_loaded(),
            view: shell.view(),
        }
    }
}

struct WorkflowHandle {
    shell: Arc<Mutex<WorkflowShell>>,
    analysis: Option<AnalysisTask>,
}

/// Map shell notices to bus events
pub(crate) fn publish_notices(event_bus: &EventBus, workflow_id: Uuid, notices: &[WorkflowNotice]) {
    for notice in notices {
        let timestamp = chrono::Utc::now();
        let event = match notice {
            WorkflowNotice::StageChanged(transition) => {
                info!(
                    workflow_id = %workflow_id,
                    old_stage = %transition.old_stage,
                    new_stage = %transition.new_stage,
                    "Diagnosis stage changed"
                );
                KrishiEvent::DiagnosisStageChanged {
                    workflow_id,
                    old_stage: transition.old_stage,
                    new_stage: transition.new_stage,
                    timestamp,
                }
            }
            WorkflowNotice::Progress(percentage) => KrishiEvent::AnalysisProgress {
                workflow_id,
                percentage: *percentage,
                timestamp,
            },
            WorkflowNotice::SoilPathChosen(path) => {
                debug!(workflow_id = %workflow_id, path = ?path, "Soil path chosen");
                KrishiEvent::SoilPathChosen {
                    workflow_id,
                    path: *path,
                    timestamp,
                }
            }
            WorkflowNotice::SoilLoaded(source) => {
                info!(workflow_id = %workflow_id, source = %source, "Soil data loaded");
                KrishiEvent::SoilDataLoaded {
                    workflow_id,
                    source: *source,
                    timestamp,
                }
            }
            WorkflowNotice::SoilReset => {
                debug!(workflow_id = %workflow_id, "Soil data reset");
                KrishiEvent::SoilDataReset {
                    workflow_id,
                    timestamp,
                }
            }
        };
        event_bus.emit_lossy(event);
    }
}

#[derive(Clone)]
pub struct WorkflowRegistry {
    workflows: Arc<RwLock<HashMap<Uuid, WorkflowHandle>>>,
    hierarchy: Arc<LocationHierarchy>,
    backend: Arc<dyn AnalysisBackend>,
    config: AnalysisConfig,
    event_bus: EventBus,
}

impl WorkflowRegistry {
    pub fn new(
        hierarchy: Arc<LocationHierarchy>,
        backend: Arc<dyn AnalysisBackend>,
        config: AnalysisConfig,
        event_bus: EventBus,
    ) -> Self {
        Self {
            workflows: Arc::new(RwLock::new(HashMap::new())),
            hierarchy,
            backend,
            config,
            event_bus,
        }
    }

    pub fn hierarchy(&self) -> &Arc<LocationHierarchy> {
        &self.hierarchy
    }

    /// Open a new workflow in `upload` with soil path `unset`
    pub async fn create(&self) -> WorkflowSnapshot {
        let workflow_id = Uuid::new_v4();
        let shell = WorkflowShell::new(self.hierarchy.clone());
        let snapshot = WorkflowSnapshot::capture(workflow_id, &shell);

        self.workflows.write().await.insert(
            workflow_id,
            WorkflowHandle {
                shell: Arc::new(Mutex::new(shell)),
                analysis: None,
            },
        );
        info!(workflow_id = %workflow_id, "Workflow opened");
        self.event_bus.emit_lossy(KrishiEvent::WorkflowOpened {
            workflow_id,
            timestamp: chrono::Utc::now(),
        });
        snapshot
    }

    pub async fn snapshot(&self, workflow_id: Uuid) -> Result<WorkflowSnapshot, WorkflowError> {
        let workflows = self.workflows.read().await;
        let handle = workflows
            .get(&workflow_id)
            .ok_or(WorkflowError::NotFound(workflow_id))?;
        let shell = handle.shell.lock().await;
        Ok(WorkflowSnapshot::capture(workflow_id, &shell))
    }

    /// Apply `action` to one workflow and start the progress task if asked
    pub async fn dispatch(
        &self,
        workflow_id: Uuid,
        action: WorkflowAction,
    ) -> Result<WorkflowSnapshot, WorkflowError> {
        let mut workflows = self.workflows.write().await;
        let handle = workflows
            .get_mut(&workflow_id)
            .ok_or(WorkflowError::NotFound(workflow_id))?;

        let action_name = action.name();
        let mut shell = handle.shell.lock().await;
        let dispatched = shell.dispatch(action).map_err(|e| {
            warn!(workflow_id = %workflow_id, action = action_name, error = %e, "Action rejected");
            e
        })?;
        debug!(
            workflow_id = %workflow_id,
            action = action_name,
            stage = %shell.stage(),
            "Action applied"
        );
        publish_notices(&self.event_bus, workflow_id, &dispatched.notices);

        if dispatched.effect == Effect::StartAnalysis {
            // replacing the handle cancels a leftover task from the previous run
            handle.analysis = Some(AnalysisTask::spawn(AnalysisContext {
                workflow_id,
                shell: handle.shell.clone(),
                backend: self.backend.clone(),
                config: self.config.clone(),
                event_bus: self.event_bus.clone(),
            }));
            info!(workflow_id = %workflow_id, backend = self.backend.name(), "Analysis started");
        }

        Ok(WorkflowSnapshot::capture(workflow_id, &shell))
    }

    /// Tear down a workflow, cancelling any running timer
    pub async fn close(&self, workflow_id: Uuid) -> Result<(), WorkflowError> {
        let handle = self
            .workflows
            .write()
            .await
            .remove(&workflow_id)
            .ok_or(WorkflowError::NotFound(workflow_id))?;
        if let Some(task) = &handle.analysis {
            if !task.is_finished() {
                // under the shell lock so no tick lands after WorkflowClosed
                let _shell = handle.shell.lock().await;
                debug!(workflow_id = %workflow_id, "Cancelling progress timer");
                task.cancel();
            }
        }
        drop(handle);

        info!(workflow_id = %workflow_id, "Workflow closed");
        self.event_bus.emit_lossy(KrishiEvent::WorkflowClosed {
            workflow_id,
            timestamp: chrono::Utc::now(),
        });
        Ok(())
    }

    /// Close every workflow (server shutdown)
    pub async fn close_all(&self) {
        let ids: Vec<Uuid> = self.workflows.read().await.keys().copied().collect();
        for id in ids {
            // a concurrent close may have won the race
            let _ = self.close(id).await;
        }
    }

    pub async fn count(&self) -> usize {
        self.workflows.read().await.len()
    }

    pub async fn contains(&self, workflow_id: Uuid) -> bool {
        self.workflows.read().await.contains_key(&workflow_id)
    }
}
