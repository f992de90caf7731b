//! Cascading location selector
//!
//! Three dependent selects over a [`LocationHierarchy`]. A stored district is
//! always valid under the stored state, and a stored city under the stored
//! district. Setting a level clears every level below it; values that are not
//! valid under their ancestors are rejected and leave the selector unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::LocationHierarchy;
use crate::error::LocationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationLevel {
    State,
    District,
    City,
}

impl fmt::Display for LocationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationLevel::State => write!(f, "state"),
            LocationLevel::District => write!(f, "district"),
            LocationLevel::City => write!(f, "city"),
        }
    }
}

/// Complete `{state, district, city}` triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSelection {
    pub state: String,
    pub district: String,
    pub city: String,
    /// "City, District, StateName"
    pub label: String,
}

#[derive(Clone)]
pub struct CascadingSelector {
    hierarchy: Arc<LocationHierarchy>,
    state: Option<String>,
    district: Option<String>,
    city: Option<String>,
}

impl fmt::Debug for CascadingSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CascadingSelector")
            .field("state", &self.state)
            .field("district", &self.district)
            .field("city", &self.city)
            .finish()
    }
}

impl PartialEq for CascadingSelector {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.district == other.district && self.city == other.city
    }
}

impl CascadingSelector {
    pub fn new(hierarchy: Arc<LocationHierarchy>) -> Self {
        Self {
            hierarchy,
            state: None,
            district: None,
            city: None,
        }
    }

    /// Select a state by code; empty input clears state and everything below
    pub fn set_state(&mut self, code: &str) -> Result<(), LocationError> {
        let code = code.trim();
        if code.is_empty() {
            self.state = None;
        } else if self.hierarchy.state(code).is_some() {
            self.state = Some(code.to_string());
        } else {
            return Err(LocationError::UnknownState(code.to_string()));
        }
        self.district = None;
        self.city = None;
        Ok(())
    }

    /// Select a district under the current state; clears the city
    pub fn set_district(&mut self, name: &str) -> Result<(), LocationError> {
        let name = name.trim();
        if name.is_empty() {
            self.district = None;
            self.city = None;
            return Ok(());
        }
        let state = self
            .state
            .as_deref()
            .ok_or(LocationError::AncestorMissing(LocationLevel::State))?;
        if !self.hierarchy.has_district(state, name) {
            return Err(LocationError::UnknownDistrict {
                state: state.to_string(),
                district: name.to_string(),
            });
        }
        self.district = Some(name.to_string());
        self.city = None;
        Ok(())
    }

    /// Select a city under the current district
    pub fn set_city(&mut self, name: &str) -> Result<(), LocationError> {
        let name = name.trim();
        if name.is_empty() {
            self.city = None;
            return Ok(());
        }
        let state = self
            .state
            .as_deref()
            .ok_or(LocationError::AncestorMissing(LocationLevel::State))?;
        let district = self
            .district
            .as_deref()
            .ok_or(LocationError::AncestorMissing(LocationLevel::District))?;
        if !self.hierarchy.has_city(state, district, name) {
            return Err(LocationError::UnknownCity {
                district: district.to_string(),
                city: name.to_string(),
            });
        }
        self.city = Some(name.to_string());
        Ok(())
    }

    pub fn set(&mut self, level: LocationLevel, value: &str) -> Result<(), LocationError> {
        match level {
            LocationLevel::State => self.set_state(value),
            LocationLevel::District => self.set_district(value),
            LocationLevel::City => self.set_city(value),
        }
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// `(code, name)` pairs for every state
    pub fn state_options(&self) -> Vec<(&str, &str)> {
        self.hierarchy
            .states()
            .iter()
            .map(|s| (s.code.as_str(), s.name.as_str()))
            .collect()
    }

    pub fn district_options(&self) -> Vec<&str> {
        match self.state.as_deref() {
            Some(state) => self.hierarchy.districts(state),
            None => Vec::new(),
        }
    }

    pub fn city_options(&self) -> Vec<&str> {
        match (self.state.as_deref(), self.district.as_deref()) {
            (Some(state), Some(district)) => self.hierarchy.cities(state, district),
            _ => Vec::new(),
        }
    }

    /// A level is enabled once all its ancestors are selected
    pub fn is_enabled(&self, level: LocationLevel) -> bool {
        match level {
            LocationLevel::State => true,
            LocationLevel::District => self.state.is_some(),
            LocationLevel::City => self.district.is_some(),
        }
    }

    /// First level without a value, `None` when the triple is complete
    pub fn missing_level(&self) -> Option<LocationLevel> {
        if self.state.is_none() {
            Some(LocationLevel::State)
        } else if self.district.is_none() {
            Some(LocationLevel::District)
        } else if self.city.is_none() {
            Some(LocationLevel::City)
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_level().is_none()
    }

    pub fn selection(&self) -> Option<LocationSelection> {
        let (state, district, city) = (
            self.state.as_deref()?,
            self.district.as_deref()?,
            self.city.as_deref()?,
        );
        Some(LocationSelection {
            state: state.to_string(),
            district: district.to_string(),
            city: city.to_string(),
            label: format!("{}, {}, {}", city, district, self.hierarchy.state_name(state)),
        })
    }
}
