//! Simulated analysis progress task
//!
//! One task per analysis run. It ticks the shell on a fixed interval with a
//! random increment, waits the settle delay once progress hits 100, asks the
//! backend for a diagnosis and moves the shell to results (or back to upload
//! on failure).
//!
//! The task is owned through [`AnalysisTask`]; dropping the handle cancels it
//! at its next suspension point.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::registry::publish_notices;
use super::shell::{Effect, WorkflowAction, WorkflowShell};
use crate::backend::AnalysisBackend;
use krishi_common::config::AnalysisConfig;
use krishi_common::events::EventBus;

/// Smallest increment as a fraction of the configured maximum
const MIN_INCREMENT_FRACTION: f64 = 0.05;

/// Everything the task needs, cloned out of the registry
pub struct AnalysisContext {
    pub workflow_id: Uuid,
    pub shell: Arc<Mutex<WorkflowShell>>,
    pub backend: Arc<dyn AnalysisBackend>,
    pub config: AnalysisConfig,
    pub event_bus: EventBus,
}

/// Handle to a running progress task; cancels the task on drop
pub struct AnalysisTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl AnalysisTask {
    pub fn spawn(ctx: AnalysisContext) -> Self {
        let token = CancellationToken::new();
        let handle = tokio::spawn(run(ctx, token.clone()));
        Self { token, handle }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for AnalysisTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Random increment in `[max * 5%, max]`, so every tick moves forward
fn draw_increment(max_increment: f64) -> f64 {
    let low = max_increment * MIN_INCREMENT_FRACTION;
    rand::thread_rng().gen_range(low..=max_increment)
}

/// Dispatch under the shell lock unless the task was cancelled meanwhile
async fn dispatch(
    ctx: &AnalysisContext,
    token: &CancellationToken,
    action: WorkflowAction,
) -> Option<Effect> {
    let mut shell = ctx.shell.lock().await;
    if token.is_cancelled() {
        return None;
    }
    match shell.dispatch(action) {
        Ok(dispatched) => {
            publish_notices(&ctx.event_bus, ctx.workflow_id, &dispatched.notices);
            Some(dispatched.effect)
        }
        Err(e) => {
            // stage left analyzing underneath us
            debug!(workflow_id = %ctx.workflow_id, error = %e, "Progress task stopping");
            None
        }
    }
}

async fn run(ctx: AnalysisContext, token: CancellationToken) {
    let workflow_id = ctx.workflow_id;
    let tick_interval = Duration::from_millis(ctx.config.tick_interval_ms);
    debug!(
        workflow_id = %workflow_id,
        tick_interval_ms = ctx.config.tick_interval_ms,
        "Progress timer started"
    );

    let mut timer = interval(tick_interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // first tick completes immediately
    timer.tick().await;

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                debug!(workflow_id = %workflow_id, "Progress timer cancelled");
                return;
            }
            _ = timer.tick() => {}
        }

        let increment = draw_increment(ctx.config.max_increment);
        match dispatch(&ctx, &token, WorkflowAction::Tick(increment)).await {
            Some(Effect::SettleAnalysis) => break,
            Some(_) => {}
            None => return,
        }
    }
    debug!(workflow_id = %workflow_id, "Progress timer stopped at 100%");

    tokio::select! {
        _ = token.cancelled() => return,
        _ = tokio::time::sleep(Duration::from_millis(ctx.config.settle_delay_ms)) => {}
    }

    let image = {
        let shell = ctx.shell.lock().await;
        shell.diagnosis().image().cloned()
    };
    let Some(image) = image else {
        return;
    };

    let result = tokio::select! {
        _ = token.cancelled() => return,
        result = ctx.backend.analyze(&image) => result,
    };

    let action = match result {
        Ok(payload) => {
            info!(
                workflow_id = %workflow_id,
                backend = ctx.backend.name(),
                condition = %payload.condition,
                confidence = payload.confidence,
                "Analysis complete"
            );
            WorkflowAction::CompleteAnalysis(payload)
        }
        Err(e) => {
            warn!(workflow_id = %workflow_id, backend = ctx.backend.name(), error = %e, "Analysis failed");
            WorkflowAction::AnalysisFailed(e.to_string())
        }
    };
    dispatch(&ctx, &token, action).await;
}
