//! Soil acquisition subsystem
//!
//! Three mutually exclusive intake paths reduce to a single loaded state:
//!
//! - card: farmer uploads a soil health card image or PDF (not parsed)
//! - reference: farmer picks a location and the reference dataset is shown
//! - manual: farmer picks a location and types readings in
//!
//! Once loaded the subsystem is read-only until [`SoilAcquisition::reset`],
//! which drops path, card, location and values in one step.

use serde::Serialize;
use std::sync::Arc;

use crate::error::{SoilError, ValidationError};
use crate::location::{CascadingSelector, LocationHierarchy, LocationLevel, LocationSelection};
use crate::models::{
    reference_dataset, soil::reference_reading, SoilParameter, SoilParameterSet, SoilStatus,
    UploadedImage,
};
use krishi_common::events::{SoilPathKind, SoilSourceKind};

/// Loaded soil data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SoilSource {
    Card { card: UploadedImage },
    Reference { location: LocationSelection },
    Manual {
        location: LocationSelection,
        values: SoilParameterSet,
    },
}

/// One row of the loaded summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilReading {
    pub parameter: SoilParameter,
    /// Displayed value, `None` for an empty manual field
    pub value: Option<String>,
    /// Status band, only known for reference readings
    pub status: Option<SoilStatus>,
    pub range: &'static str,
}

impl SoilSource {
    pub fn kind(&self) -> SoilSourceKind {
        match self {
            SoilSource::Card { .. } => SoilSourceKind::Card,
            SoilSource::Reference { .. } => SoilSourceKind::Reference,
            SoilSource::Manual { .. } => SoilSourceKind::Manual,
        }
    }

    pub fn location(&self) -> Option<&LocationSelection> {
        match self {
            SoilSource::Card { .. } => None,
            SoilSource::Reference { location } | SoilSource::Manual { location, .. } => {
                Some(location)
            }
        }
    }

    /// Rows to display
    ///
    /// Card uploads are not parsed, so card and reference sources both show
    /// the reference dataset. Manual sources show the typed values against the
    /// reference ranges.
    pub fn readings(&self) -> Vec<SoilReading> {
        match self {
            SoilSource::Card { .. } | SoilSource::Reference { .. } => reference_dataset()
                .iter()
                .map(|r| SoilReading {
                    parameter: r.parameter,
                    value: Some(r.value.to_string()),
                    status: Some(r.status),
                    range: r.range,
                })
                .collect(),
            SoilSource::Manual { values, .. } => values
                .iter()
                .map(|(parameter, raw)| SoilReading {
                    parameter,
                    value: raw.map(str::to_string),
                    status: None,
                    range: reference_reading(parameter).range,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SoilIntake {
    Unset,
    /// Card path chosen, no file read yet
    AwaitingCard,
    /// No-card path: location lookup with an optional open manual form
    Lookup {
        location: CascadingSelector,
        manual: Option<SoilParameterSet>,
    },
    Loaded(SoilSource),
}

#[derive(Debug, Clone)]
pub struct SoilAcquisition {
    hierarchy: Arc<LocationHierarchy>,
    intake: SoilIntake,
}

impl SoilAcquisition {
    pub fn new(hierarchy: Arc<LocationHierarchy>) -> Self {
        Self {
            hierarchy,
            intake: SoilIntake::Unset,
        }
    }

    pub fn intake(&self) -> &SoilIntake {
        &self.intake
    }

    pub fn path(&self) -> SoilPathKind {
        match &self.intake {
            SoilIntake::Unset => SoilPathKind::Unset,
            SoilIntake::AwaitingCard | SoilIntake::Loaded(SoilSource::Card { .. }) => {
                SoilPathKind::HasCard
            }
            SoilIntake::Lookup { .. } | SoilIntake::Loaded(_) => SoilPathKind::NoCard,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.intake, SoilIntake::Loaded(_))
    }

    pub fn source(&self) -> Option<&SoilSource> {
        match &self.intake {
            SoilIntake::Loaded(source) => Some(source),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<&CascadingSelector> {
        match &self.intake {
            SoilIntake::Lookup { location, .. } => Some(location),
            _ => None,
        }
    }

    pub fn manual_draft(&self) -> Option<&SoilParameterSet> {
        match &self.intake {
            SoilIntake::Lookup { manual, .. } => manual.as_ref(),
            _ => None,
        }
    }

    /// Pick the card (`true`) or no-card (`false`) path
    ///
    /// Switching paths discards the other path's partial input. Picking the
    /// current path again keeps it. Returns whether the path changed.
    pub fn choose_path(&mut self, has_card: bool) -> Result<bool, SoilError> {
        let next = match (&self.intake, has_card) {
            (SoilIntake::Loaded(_), _) => return Err(SoilError::AlreadyLoaded),
            (SoilIntake::AwaitingCard, true) | (SoilIntake::Lookup { .. }, false) => {
                return Ok(false)
            }
            (_, true) => SoilIntake::AwaitingCard,
            (_, false) => SoilIntake::Lookup {
                location: CascadingSelector::new(self.hierarchy.clone()),
                manual: None,
            },
        };
        self.intake = next;
        Ok(true)
    }

    /// Store the uploaded card; `None` (no file chosen) is a no-op
    pub fn upload_card(&mut self, card: Option<UploadedImage>) -> Result<bool, SoilError> {
        match self.intake {
            SoilIntake::AwaitingCard => {}
            SoilIntake::Loaded(_) => return Err(SoilError::AlreadyLoaded),
            _ => return Err(SoilError::WrongPath),
        }
        let Some(card) = card else {
            return Ok(false);
        };
        self.intake = SoilIntake::Loaded(SoilSource::Card { card });
        Ok(true)
    }

    fn lookup_mut(
        &mut self,
    ) -> Result<(&mut CascadingSelector, &mut Option<SoilParameterSet>), SoilError> {
        match &mut self.intake {
            SoilIntake::Lookup { location, manual } => Ok((location, manual)),
            SoilIntake::Loaded(_) => Err(SoilError::AlreadyLoaded),
            _ => Err(SoilError::WrongPath),
        }
    }

    fn complete_location(&mut self) -> Result<LocationSelection, SoilError> {
        let (location, _) = self.lookup_mut()?;
        match location.missing_level() {
            Some(level) => Err(ValidationError::MissingLocation { level }.into()),
            None => location.selection().ok_or_else(|| {
                ValidationError::MissingLocation {
                    level: LocationLevel::City,
                }
                .into()
            }),
        }
    }

    pub fn set_location(&mut self, level: LocationLevel, value: &str) -> Result<(), SoilError> {
        let (location, _) = self.lookup_mut()?;
        location.set(level, value)?;
        Ok(())
    }

    /// Load the reference dataset for the chosen location
    pub fn confirm_reference(&mut self) -> Result<(), SoilError> {
        let location = self.complete_location()?;
        self.intake = SoilIntake::Loaded(SoilSource::Reference { location });
        Ok(())
    }

    /// Open the manual form; only available with a complete location
    pub fn open_manual_entry(&mut self) -> Result<(), SoilError> {
        self.complete_location()?;
        let (_, manual) = self.lookup_mut()?;
        manual.get_or_insert_with(SoilParameterSet::new);
        Ok(())
    }

    /// Close the manual form, discarding what was typed
    pub fn cancel_manual_entry(&mut self) -> Result<(), SoilError> {
        let (_, manual) = self.lookup_mut()?;
        *manual = None;
        Ok(())
    }

    pub fn set_manual_field(&mut self, parameter: SoilParameter, raw: &str) -> Result<(), SoilError> {
        let (_, manual) = self.lookup_mut()?;
        let draft = manual.as_mut().ok_or(SoilError::ManualEntryClosed)?;
        draft.set(parameter, raw).map_err(|_| ValidationError::NotNumeric {
            parameter: parameter.key().to_string(),
            value: raw.to_string(),
        })?;
        Ok(())
    }

    /// Store the manual readings
    ///
    /// Only the location is validated; every numeric field may be empty. On
    /// failure nothing changes.
    pub fn submit_manual(&mut self) -> Result<(), SoilError> {
        let location = self.complete_location()?;
        let (_, manual) = self.lookup_mut()?;
        let values = manual.take().unwrap_or_default();
        self.intake = SoilIntake::Loaded(SoilSource::Manual { location, values });
        Ok(())
    }

    /// Back to unset; returns whether anything was cleared
    pub fn reset(&mut self) -> bool {
        let changed = self.intake != SoilIntake::Unset;
        self.intake = SoilIntake::Unset;
        changed
    }
}
