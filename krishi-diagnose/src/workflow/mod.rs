//! Crop diagnosis and soil intake workflow
//!
//! - `diagnosis`: upload → analyzing → results stage controller
//! - `soil`: card / reference / manual soil intake paths
//! - `shell`: single reducer composing both, plus the derived view
//! - `progress`: cancellable simulated-analysis timer
//! - `registry`: open workflow instances by id

pub mod diagnosis;
pub mod progress;
pub mod registry;
pub mod shell;
pub mod soil;

pub use diagnosis::{DiagnosisController, DiagnosisState, StageTransition, TickOutcome};
pub use progress::AnalysisTask;
pub use registry::{WorkflowRegistry, WorkflowSnapshot};
pub use shell::{
    Dispatched, Effect, SelectOption, SoilView, WorkflowAction, WorkflowNotice, WorkflowShell,
    WorkflowView,
};
pub use soil::{SoilAcquisition, SoilIntake, SoilReading, SoilSource};
