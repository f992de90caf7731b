//! Diagnosis workflow type definitions
//!
//! Supporting types shared by the workflow engine and its event consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level stage of the crop diagnosis workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisStage {
    /// Waiting for a crop photo
    Upload,
    /// Simulated analysis in progress
    Analyzing,
    /// Diagnosis shown
    Results,
}

impl fmt::Display for DiagnosisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiagnosisStage::Upload => "upload",
            DiagnosisStage::Analyzing => "analyzing",
            DiagnosisStage::Results => "results",
        })
    }
}

/// Which soil intake path the farmer picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilPathKind {
    Unset,
    HasCard,
    NoCard,
}

/// Where loaded soil data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilSourceKind {
    /// Uploaded soil health card (not parsed)
    Card,
    /// Reference dataset annotated with the chosen location
    Reference,
    /// Values typed in by the farmer
    Manual,
}

impl fmt::Display for SoilSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SoilSourceKind::Card => "card",
            SoilSourceKind::Reference => "reference",
            SoilSourceKind::Manual => "manual",
        })
    }
}
