//! Workflow shell
//!
//! Owns one diagnosis controller and one soil acquisition subsystem. Every
//! mutation goes through [`WorkflowShell::dispatch`]; the shell itself only
//! routes actions and derives the view.

use serde::Serialize;
use std::sync::Arc;

use super::diagnosis::{DiagnosisController, StageTransition, TickOutcome};
use super::soil::{SoilAcquisition, SoilIntake, SoilReading};
use crate::error::WorkflowError;
use crate::location::{LocationHierarchy, LocationLevel};
use crate::models::{DiagnosisPayload, SoilParameter, SoilParameterSet, UploadedImage};
use krishi_common::events::{DiagnosisStage, SoilPathKind, SoilSourceKind};

/// Everything a farmer (or the progress timer) can do to a workflow
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowAction {
    SubmitImage(Option<UploadedImage>),
    Tick(f64),
    CompleteAnalysis(DiagnosisPayload),
    AnalysisFailed(String),
    ResetDiagnosis,
    ChoosePath { has_card: bool },
    UploadCard(Option<UploadedImage>),
    SetLocation { level: LocationLevel, value: String },
    ConfirmReference,
    OpenManualEntry,
    CancelManualEntry,
    SetManualField { parameter: SoilParameter, value: String },
    SubmitManual,
    ResetSoil,
}

impl WorkflowAction {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowAction::SubmitImage(_) => "submit_image",
            WorkflowAction::Tick(_) => "tick",
            WorkflowAction::CompleteAnalysis(_) => "complete_analysis",
            WorkflowAction::AnalysisFailed(_) => "analysis_failed",
            WorkflowAction::ResetDiagnosis => "reset_diagnosis",
            WorkflowAction::ChoosePath { .. } => "choose_path",
            WorkflowAction::UploadCard(_) => "upload_card",
            WorkflowAction::SetLocation { .. } => "set_location",
            WorkflowAction::ConfirmReference => "confirm_reference",
            WorkflowAction::OpenManualEntry => "open_manual_entry",
            WorkflowAction::CancelManualEntry => "cancel_manual_entry",
            WorkflowAction::SetManualField { .. } => "set_manual_field",
            WorkflowAction::SubmitManual => "submit_manual",
            WorkflowAction::ResetSoil => "reset_soil",
        }
    }
}

/// Observable change produced by a dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowNotice {
    StageChanged(StageTransition),
    Progress(f64),
    SoilPathChosen(SoilPathKind),
    SoilLoaded(SoilSourceKind),
    SoilReset,
}

/// Side effect the owner of the shell must carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Analysis started; spawn the progress timer
    StartAnalysis,
    /// Progress reached 100; stop ticking and begin the settle delay
    SettleAnalysis,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dispatched {
    pub notices: Vec<WorkflowNotice>,
    pub effect: Effect,
}

impl Dispatched {
    fn none() -> Self {
        Self::default()
    }

    fn notice(notice: WorkflowNotice) -> Self {
        Self {
            notices: vec![notice],
            effect: Effect::None,
        }
    }

    fn stage(transition: StageTransition) -> Self {
        Self::notice(WorkflowNotice::StageChanged(transition))
    }
}

/// `(value, label)` pair for a select input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// What the soil section shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SoilView {
    PathChoice,
    CardUpload,
    LocationLookup {
        states: Vec<SelectOption>,
        districts: Vec<String>,
        cities: Vec<String>,
        state: Option<String>,
        district: Option<String>,
        city: Option<String>,
        district_enabled: bool,
        city_enabled: bool,
        /// Reference lookup and manual entry are available
        can_continue: bool,
        /// Open manual form with the values typed so far
        manual: Option<SoilParameterSet>,
    },
    Summary {
        source: SoilSourceKind,
        /// "City, District, StateName"; `None` for card uploads
        location_label: Option<String>,
        /// Uploaded card, shown above the readings
        card: Option<UploadedImage>,
        readings: Vec<SoilReading>,
    },
}

/// What the page shows, derived from `(stage, soil path)`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "lowercase")]
pub enum WorkflowView {
    Upload {
        notice: Option<String>,
        soil: SoilView,
    },
    Analyzing {
        image: UploadedImage,
        progress: f64,
    },
    Results {
        image: UploadedImage,
        diagnosis: DiagnosisPayload,
    },
}

#[derive(Debug, Clone)]
pub struct WorkflowShell {
    diagnosis: DiagnosisController,
    soil: SoilAcquisition,
}

impl WorkflowShell {
    pub fn new(hierarchy: Arc<LocationHierarchy>) -> Self {
        Self {
            diagnosis: DiagnosisController::new(),
            soil: SoilAcquisition::new(hierarchy),
        }
    }

    pub fn diagnosis(&self) -> &DiagnosisController {
        &self.diagnosis
    }

    pub fn soil(&self) -> &SoilAcquisition {
        &self.soil
    }

    pub fn stage(&self) -> DiagnosisStage {
        self.diagnosis.stage()
    }

    /// Apply one action; on error nothing changed
    pub fn dispatch(&mut self, action: WorkflowAction) -> Result<Dispatched, WorkflowError> {
        let dispatched = match action {
            WorkflowAction::SubmitImage(image) => match self.diagnosis.submit_image(image)? {
                Some(transition) => Dispatched {
                    notices: vec![
                        WorkflowNotice::StageChanged(transition),
                        WorkflowNotice::Progress(0.0),
                    ],
                    effect: Effect::StartAnalysis,
                },
                None => Dispatched::none(),
            },
            WorkflowAction::Tick(increment) => match self.diagnosis.tick(increment)? {
                TickOutcome::Advanced(progress) => {
                    Dispatched::notice(WorkflowNotice::Progress(progress))
                }
                TickOutcome::Completed => Dispatched {
                    notices: vec![WorkflowNotice::Progress(self.diagnosis.progress())],
                    effect: Effect::SettleAnalysis,
                },
                TickOutcome::Idle => Dispatched::none(),
            },
            WorkflowAction::CompleteAnalysis(payload) => {
                Dispatched::stage(self.diagnosis.complete(payload)?)
            }
            WorkflowAction::AnalysisFailed(message) => {
                Dispatched::stage(self.diagnosis.fail(message)?)
            }
            WorkflowAction::ResetDiagnosis => Dispatched::stage(self.diagnosis.reset()?),
            WorkflowAction::ChoosePath { has_card } => {
                if self.soil.choose_path(has_card)? {
                    Dispatched::notice(WorkflowNotice::SoilPathChosen(self.soil.path()))
                } else {
                    Dispatched::none()
                }
            }
            WorkflowAction::UploadCard(card) => {
                if self.soil.upload_card(card)? {
                    Dispatched::notice(WorkflowNotice::SoilLoaded(SoilSourceKind::Card))
                } else {
                    Dispatched::none()
                }
            }
            WorkflowAction::SetLocation { level, value } => {
                self.soil.set_location(level, &value)?;
                Dispatched::none()
            }
            WorkflowAction::ConfirmReference => {
                self.soil.confirm_reference()?;
                Dispatched::notice(WorkflowNotice::SoilLoaded(SoilSourceKind::Reference))
            }
            WorkflowAction::OpenManualEntry => {
                self.soil.open_manual_entry()?;
                Dispatched::none()
            }
            WorkflowAction::CancelManualEntry => {
                self.soil.cancel_manual_entry()?;
                Dispatched::none()
            }
            WorkflowAction::SetManualField { parameter, value } => {
                self.soil.set_manual_field(parameter, &value)?;
                Dispatched::none()
            }
            WorkflowAction::SubmitManual => {
                self.soil.submit_manual()?;
                Dispatched::notice(WorkflowNotice::SoilLoaded(SoilSourceKind::Manual))
            }
            WorkflowAction::ResetSoil => {
                if self.soil.reset() {
                    Dispatched::notice(WorkflowNotice::SoilReset)
                } else {
                    Dispatched::none()
                }
            }
        };
        Ok(dispatched)
    }

    pub fn view(&self) -> WorkflowView {
        let state = self.diagnosis.state();
        match state {
            super::DiagnosisState::Upload { notice } => WorkflowView::Upload {
                notice: notice.clone(),
                soil: self.soil_view(),
            },
            super::DiagnosisState::Analyzing { image, progress } => WorkflowView::Analyzing {
                image: image.clone(),
                progress: *progress,
            },
            super::DiagnosisState::Results { image, payload } => WorkflowView::Results {
                image: image.clone(),
                diagnosis: payload.clone(),
            },
        }
    }

    fn soil_view(&self) -> SoilView {
        match self.soil.intake() {
            SoilIntake::Unset => SoilView::PathChoice,
            SoilIntake::AwaitingCard => SoilView::CardUpload,
            SoilIntake::Lookup { location, manual } => SoilView::LocationLookup {
                states: location
                    .state_options()
                    .into_iter()
                    .map(|(code, name)| SelectOption {
                        value: code.to_string(),
                        label: name.to_string(),
                    })
                    .collect(),
                districts: location.district_options().into_iter().map(String::from).collect(),
                cities: location.city_options().into_iter().map(String::from).collect(),
                state: location.state().map(String::from),
                district: location.district().map(String::from),
                city: location.city().map(String::from),
                district_enabled: location.is_enabled(LocationLevel::District),
                city_enabled: location.is_enabled(LocationLevel::City),
                can_continue: location.is_complete(),
                manual: manual.clone(),
            },
            SoilIntake::Loaded(source) => SoilView::Summary {
                source: source.kind(),
                location_label: source.location().map(|l| l.label.clone()),
                card: match source {
                    super::SoilSource::Card { card } => Some(card.clone()),
                    _ => None,
                },
                readings: source.readings(),
            },
        }
    }
}
