//! Workflow engine tests
//!
//! Drives the stage controller, soil acquisition and location selector
//! through their public contracts, plus the registry with paused time.

use std::sync::Arc;
use std::time::Duration;

use krishi_common::config::AnalysisConfig;
use krishi_common::events::{DiagnosisStage, EventBus, KrishiEvent, SoilPathKind};
use krishi_diagnose::backend::SimulatedBackend;
use krishi_diagnose::error::{LocationError, SoilError, StageError, ValidationError, WorkflowError};
use krishi_diagnose::location::{CascadingSelector, LocationHierarchy, LocationLevel};
use krishi_diagnose::models::{DiagnosisPayload, SoilParameter, UploadedImage};
use krishi_diagnose::workflow::{
    DiagnosisController, SoilAcquisition, SoilIntake, TickOutcome, WorkflowAction, WorkflowRegistry,
};

fn hierarchy() -> Arc<LocationHierarchy> {
    Arc::new(LocationHierarchy::builtin())
}

fn leaf() -> Option<UploadedImage> {
    UploadedImage::from_data_uri("data:image/jpeg;base64,/9j/4AAQSkZJRg==")
}

fn pick(soil: &mut SoilAcquisition, state: &str, district: &str, city: &str) {
    soil.set_location(LocationLevel::State, state).unwrap();
    soil.set_location(LocationLevel::District, district).unwrap();
    soil.set_location(LocationLevel::City, city).unwrap();
}

// ============================================================================
// Diagnosis stage controller
// ============================================================================

#[test]
fn test_progress_non_decreasing_and_clamped() {
    // Mix of tiny, zero, negative and oversized increments
    let increments = [3.5, 0.0, -4.0, 12.25, 0.01, 40.0, 7.0, 90.0, 5.0];

    let mut controller = DiagnosisController::new();
    controller.submit_image(leaf()).unwrap();

    let mut last = controller.progress();
    let mut completed = false;
    for inc in increments {
        let outcome = controller.tick(inc).unwrap();
        let now = controller.progress();
        assert!(now >= last, "progress went from {} to {}", last, now);
        assert!(now <= 100.0);
        if outcome == TickOutcome::Completed {
            completed = true;
        }
        last = now;
    }

    assert!(completed);
    assert_eq!(controller.progress(), 100.0);
    // Extra ticks after completion change nothing
    assert_eq!(controller.tick(10.0).unwrap(), TickOutcome::Idle);
    assert_eq!(controller.stage(), DiagnosisStage::Analyzing);

    controller.complete(DiagnosisPayload::leaf_spot_sample()).unwrap();
    assert_eq!(controller.stage(), DiagnosisStage::Results);
}

#[test]
fn test_reset_from_results_clears_everything() {
    let mut controller = DiagnosisController::new();
    controller.submit_image(leaf()).unwrap();
    controller.tick(100.0).unwrap();
    controller.complete(DiagnosisPayload::leaf_spot_sample()).unwrap();

    controller.reset().unwrap();
    assert_eq!(controller.stage(), DiagnosisStage::Upload);
    assert!(controller.image().is_none());
    assert_eq!(controller.progress(), 0.0);
    assert!(controller.payload().is_none());
}

#[test]
fn test_reset_outside_results_rejected() {
    let mut controller = DiagnosisController::new();
    assert_eq!(controller.reset().unwrap_err(), StageError::NotInResults);
    controller.submit_image(leaf()).unwrap();
    assert_eq!(controller.reset().unwrap_err(), StageError::NotInResults);
    assert_eq!(controller.stage(), DiagnosisStage::Analyzing);
}

#[test]
fn test_completion_requires_full_progress() {
    let mut controller = DiagnosisController::new();
    controller.submit_image(leaf()).unwrap();
    controller.tick(30.0).unwrap();
    assert!(matches!(
        controller.complete(DiagnosisPayload::leaf_spot_sample()),
        Err(StageError::ProgressIncomplete(p)) if p == 30.0
    ));
}

#[test]
fn test_no_file_is_silent_noop() {
    let mut controller = DiagnosisController::new();
    assert_eq!(controller.submit_image(None).unwrap(), None);
    assert_eq!(controller.stage(), DiagnosisStage::Upload);
}

#[test]
fn test_resubmit_while_analyzing_rejected() {
    let mut controller = DiagnosisController::new();
    controller.submit_image(leaf()).unwrap();
    controller.tick(20.0).unwrap();

    let other = UploadedImage::from_data_uri("data:image/png;base64,iVBORw0KGgo=");
    assert_eq!(
        controller.submit_image(other).unwrap_err(),
        StageError::AnalysisInProgress
    );
    assert_eq!(controller.image(), leaf().as_ref());
    assert_eq!(controller.progress(), 20.0);
}

#[test]
fn test_end_to_end_diagnosis() {
    let mut controller = DiagnosisController::new();
    assert_eq!(controller.stage(), DiagnosisStage::Upload);

    controller.submit_image(leaf()).unwrap();
    assert_eq!(controller.stage(), DiagnosisStage::Analyzing);
    assert_eq!(controller.progress(), 0.0);

    let mut last = 0.0;
    loop {
        match controller.tick(9.0).unwrap() {
            TickOutcome::Advanced(p) => {
                assert!(p > last);
                last = p;
            }
            TickOutcome::Completed => break,
            TickOutcome::Idle => panic!("idle before completion"),
        }
    }
    assert_eq!(controller.progress(), 100.0);

    controller.complete(DiagnosisPayload::leaf_spot_sample()).unwrap();
    assert_eq!(controller.stage(), DiagnosisStage::Results);
    assert_eq!(controller.image(), leaf().as_ref());
    assert_eq!(controller.payload().unwrap().confidence, 87);

    controller.reset().unwrap();
    assert_eq!(controller.stage(), DiagnosisStage::Upload);
    assert!(controller.image().is_none());
}

// ============================================================================
// Cascading location selector
// ============================================================================

#[test]
fn test_invalid_district_never_stored() {
    let mut selector = CascadingSelector::new(hierarchy());
    selector.set_state("PB").unwrap();

    let err = selector.set_district("Pune").unwrap_err();
    assert!(matches!(err, LocationError::UnknownDistrict { .. }));
    assert_eq!(selector.district(), None);
    assert_eq!(selector.state(), Some("PB"));
}

#[test]
fn test_changing_ancestor_clears_descendants() {
    let mut selector = CascadingSelector::new(hierarchy());
    selector.set_state("MH").unwrap();
    selector.set_district("Pune").unwrap();
    selector.set_city("Baramati").unwrap();

    selector.set_district("Nashik").unwrap();
    assert_eq!(selector.district(), Some("Nashik"));
    assert_eq!(selector.city(), None);
    assert_eq!(selector.state(), Some("MH"));

    selector.set_city("Sinnar").unwrap();
    selector.set_state("KA").unwrap();
    assert_eq!(selector.district(), None);
    assert_eq!(selector.city(), None);
    assert!(selector.city_options().is_empty());
}

#[test]
fn test_descendant_without_ancestor_rejected() {
    let mut selector = CascadingSelector::new(hierarchy());
    assert!(!selector.is_enabled(LocationLevel::District));
    assert!(selector.district_options().is_empty());
    assert!(matches!(
        selector.set_city("Baramati"),
        Err(LocationError::AncestorMissing(LocationLevel::State))
    ));

    selector.set_state("MH").unwrap();
    assert!(!selector.is_enabled(LocationLevel::City));
    assert!(matches!(
        selector.set_city("Baramati"),
        Err(LocationError::AncestorMissing(LocationLevel::District))
    ));
    assert_eq!(selector.city(), None);
}

// ============================================================================
// Soil acquisition
// ============================================================================

#[test]
fn test_submit_manual_requires_every_location_level() {
    let mut soil = SoilAcquisition::new(hierarchy());
    soil.choose_path(false).unwrap();

    let expect_missing = |soil: &mut SoilAcquisition, level: LocationLevel| {
        let before = soil.intake().clone();
        match soil.submit_manual() {
            Err(SoilError::Validation(ValidationError::MissingLocation { level: missing })) => {
                assert_eq!(missing, level)
            }
            other => panic!("expected missing {:?}, got {:?}", level, other),
        }
        assert_eq!(soil.intake(), &before);
    };

    expect_missing(&mut soil, LocationLevel::State);
    soil.set_location(LocationLevel::State, "UP").unwrap();
    expect_missing(&mut soil, LocationLevel::District);
    soil.set_location(LocationLevel::District, "Lucknow").unwrap();
    expect_missing(&mut soil, LocationLevel::City);

    soil.set_location(LocationLevel::City, "Lucknow City").unwrap();
    soil.submit_manual().unwrap();
    assert!(soil.is_loaded());
}

#[test]
fn test_manual_values_do_not_bypass_location_check() {
    let mut soil = SoilAcquisition::new(hierarchy());
    soil.choose_path(false).unwrap();
    pick(&mut soil, "KA", "Mysore", "Mandya");
    soil.open_manual_entry().unwrap();
    soil.set_manual_field(SoilParameter::Ph, "6.4").unwrap();

    // Clearing the city keeps the draft but blocks submission
    soil.set_location(LocationLevel::City, "").unwrap();
    assert!(soil.submit_manual().is_err());
    assert_eq!(soil.manual_draft().unwrap().raw(SoilParameter::Ph), Some("6.4"));
    assert!(!soil.is_loaded());
}

#[test]
fn test_card_path_after_manual_then_reset_is_unset() {
    let mut soil = SoilAcquisition::new(hierarchy());
    soil.choose_path(false).unwrap();
    pick(&mut soil, "MH", "Pune", "Baramati");
    soil.open_manual_entry().unwrap();
    soil.set_manual_field(SoilParameter::Nitrogen, "300").unwrap();
    soil.submit_manual().unwrap();
    assert!(soil.is_loaded());

    assert!(matches!(soil.choose_path(true), Err(SoilError::AlreadyLoaded)));
    assert!(soil.reset());

    assert_eq!(soil.intake(), &SoilIntake::Unset);
    assert_eq!(soil.path(), SoilPathKind::Unset);
    assert!(soil.location().is_none());
    assert!(soil.manual_draft().is_none());
    assert!(soil.source().is_none());
}

#[test]
fn test_switching_paths_discards_partial_input() {
    let mut soil = SoilAcquisition::new(hierarchy());
    soil.choose_path(false).unwrap();
    soil.set_location(LocationLevel::State, "MH").unwrap();

    assert!(soil.choose_path(true).unwrap());
    assert!(soil.location().is_none());

    assert!(soil.choose_path(false).unwrap());
    assert_eq!(soil.location().unwrap().state(), None);
}

#[test]
fn test_end_to_end_manual_entry() {
    let mut soil = SoilAcquisition::new(hierarchy());
    soil.choose_path(false).unwrap();

    soil.set_location(LocationLevel::State, "MH").unwrap();
    assert_eq!(
        soil.location().unwrap().district_options(),
        vec!["Mumbai", "Pune", "Nashik", "Aurangabad", "Solapur", "Nagpur"]
    );

    soil.set_location(LocationLevel::District, "Pune").unwrap();
    assert_eq!(
        soil.location().unwrap().city_options(),
        vec!["Pune City", "Pimpri-Chinchwad", "Baramati", "Maval"]
    );

    soil.set_location(LocationLevel::City, "Baramati").unwrap();
    soil.submit_manual().unwrap();
    assert!(soil.is_loaded());

    let source = soil.source().unwrap();
    assert_eq!(source.location().unwrap().label, "Baramati, Pune, Maharashtra");
    assert!(source.readings().iter().all(|r| r.value.is_none()));
}

// ============================================================================
// Registry with the simulated timer
// ============================================================================

fn registry(event_bus: EventBus) -> WorkflowRegistry {
    WorkflowRegistry::new(
        hierarchy(),
        Arc::new(SimulatedBackend::new(Duration::from_millis(300))),
        AnalysisConfig::default(),
        event_bus,
    )
}

#[tokio::test(start_paused = true)]
async fn test_registry_runs_analysis_to_results() {
    let event_bus = EventBus::new(512);
    let mut rx = event_bus.subscribe();
    let registry = registry(event_bus);
    let id = registry.create().await.workflow_id;

    let snapshot = registry
        .dispatch(id, WorkflowAction::SubmitImage(leaf()))
        .await
        .unwrap();
    assert_eq!(snapshot.stage, DiagnosisStage::Analyzing);
    assert_eq!(snapshot.progress, 0.0);

    // Worst case: 134 ticks at the minimum increment, then settle and backend
    tokio::time::sleep(Duration::from_secs(60)).await;

    let snapshot = registry.snapshot(id).await.unwrap();
    assert_eq!(snapshot.stage, DiagnosisStage::Results);
    assert_eq!(snapshot.progress, 100.0);

    let mut last = 0.0;
    let mut stages = Vec::new();
    while let Ok(event) = rx.try_recv() {
        match event {
            KrishiEvent::AnalysisProgress { percentage, .. } => {
                assert!(percentage >= last);
                last = percentage;
            }
            KrishiEvent::DiagnosisStageChanged { new_stage, .. } => stages.push(new_stage),
            _ => {}
        }
    }
    assert_eq!(last, 100.0);
    assert_eq!(stages, vec![DiagnosisStage::Analyzing, DiagnosisStage::Results]);

    // Resubmitting while results are shown is refused
    let err = registry
        .dispatch(id, WorkflowAction::SubmitImage(leaf()))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Stage(StageError::ResultsPending)));
}

#[tokio::test(start_paused = true)]
async fn test_close_all_stops_every_timer() {
    let event_bus = EventBus::new(512);
    let mut rx = event_bus.subscribe();
    let registry = registry(event_bus);

    let mut ids = Vec::new();
    for _ in 0..3 {
        let id = registry.create().await.workflow_id;
        registry
            .dispatch(id, WorkflowAction::SubmitImage(leaf()))
            .await
            .unwrap();
        ids.push(id);
    }
    registry.close_all().await;
    assert_eq!(registry.count().await, 0);

    while rx.try_recv().is_ok() {}
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(rx.try_recv().is_err());
}
