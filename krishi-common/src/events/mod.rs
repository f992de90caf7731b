//! Event types for the Krishi event system
//!
//! Provides shared event definitions and EventBus for all Krishi services.

mod workflow_types;

pub use workflow_types::{DiagnosisStage, SoilPathKind, SoilSourceKind};

use crate::Language;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Krishi event types
///
/// Events are broadcast via EventBus and can be serialized for SSE transmission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum KrishiEvent {
    /// A new diagnosis workflow instance was opened
    WorkflowOpened {
        workflow_id: Uuid,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Diagnosis stage changed
    ///
    /// Triggers:
    /// - SSE: switch the rendered stage
    DiagnosisStageChanged {
        workflow_id: Uuid,
        old_stage: DiagnosisStage,
        new_stage: DiagnosisStage,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Simulated analysis advanced
    ///
    /// NOTE: only transmitted via SSE, never stored.
    AnalysisProgress {
        workflow_id: Uuid,
        /// Percentage complete (0.0 - 100.0)
        percentage: f64,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Farmer picked (or switched) a soil intake path
    SoilPathChosen {
        workflow_id: Uuid,
        path: SoilPathKind,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Soil data became ready for display
    SoilDataLoaded {
        workflow_id: Uuid,
        source: SoilSourceKind,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Soil intake returned to its initial state
    SoilDataReset {
        workflow_id: Uuid,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Workflow instance torn down
    WorkflowClosed {
        workflow_id: Uuid,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Display language changed for the service
    LanguageChanged {
        language: Language,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

impl KrishiEvent {
    /// Event name used as the SSE `event:` field
    pub fn event_type(&self) -> &'static str {
        match self {
            KrishiEvent::WorkflowOpened { .. } => "WorkflowOpened",
            KrishiEvent::DiagnosisStageChanged { .. } => "DiagnosisStageChanged",
            KrishiEvent::AnalysisProgress { .. } => "AnalysisProgress",
            KrishiEvent::SoilPathChosen { .. } => "SoilPathChosen",
            KrishiEvent::SoilDataLoaded { .. } => "SoilDataLoaded",
            KrishiEvent::SoilDataReset { .. } => "SoilDataReset",
            KrishiEvent::WorkflowClosed { .. } => "WorkflowClosed",
            KrishiEvent::LanguageChanged { .. } => "LanguageChanged",
        }
    }

    /// Workflow the event belongs to, `None` for service-wide events
    pub fn workflow_id(&self) -> Option<Uuid> {
        match self {
            KrishiEvent::WorkflowOpened { workflow_id, .. }
            | KrishiEvent::DiagnosisStageChanged { workflow_id, .. }
            | KrishiEvent::AnalysisProgress { workflow_id, .. }
            | KrishiEvent::SoilPathChosen { workflow_id, .. }
            | KrishiEvent::SoilDataLoaded { workflow_id, .. }
            | KrishiEvent::SoilDataReset { workflow_id, .. }
            | KrishiEvent::WorkflowClosed { workflow_id, .. } => Some(*workflow_id),
            KrishiEvent::LanguageChanged { .. } => None,
        }
    }
}

/// Broadcast bus for [`KrishiEvent`]s
///
/// Cheap to clone; all clones share one channel.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<KrishiEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus with specified channel capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of events to buffer before dropping old events
    ///
    /// # Examples
    ///
    /// ```
    /// use krishi_common::events::EventBus;
    ///
    /// let event_bus = EventBus::new(100);
    /// assert_eq!(event_bus.capacity(), 100);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    ///
    /// Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<KrishiEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Returns `Ok(subscriber_count)` if at least one subscriber exists.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: KrishiEvent,
    ) -> Result<usize, broadcast::error::SendError<KrishiEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring if no subscribers are listening
    pub fn emit_lossy(&self, event: KrishiEvent) {
        let _ = self.tx.send(event);
    }

    /// Get the current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Get the configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_emitted_event() {
        let bus = EventBus::new(10);
        let mut rx = bus.subscribe();
        let workflow_id = Uuid::new_v4();

        bus.emit(KrishiEvent::DiagnosisStageChanged {
            workflow_id,
            old_stage: DiagnosisStage::Upload,
            new_stage: DiagnosisStage::Analyzing,
            timestamp: chrono::Utc::now(),
        })
        .unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type(), "DiagnosisStageChanged");
        assert_eq!(event.workflow_id(), Some(workflow_id));
    }

    #[test]
    fn test_emit_without_subscribers_errors_but_lossy_does_not_panic() {
        let bus = EventBus::new(10);
        assert_eq!(bus.subscriber_count(), 0);
        let event = KrishiEvent::LanguageChanged {
            language: Language::Hi,
            timestamp: chrono::Utc::now(),
        };
        assert!(bus.emit(event.clone()).is_err());
        bus.emit_lossy(event);
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = KrishiEvent::SoilDataLoaded {
            workflow_id: Uuid::nil(),
            source: SoilSourceKind::Manual,
            timestamp: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "SoilDataLoaded");
        assert_eq!(json["source"], "manual");
        assert_eq!(event.workflow_id(), Some(Uuid::nil()));
    }
}
