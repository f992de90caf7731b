//! Soil health parameters
//!
//! A [`SoilParameterSet`] keeps every reading as the text the farmer typed.
//! Values must parse as a finite number when present; absence is allowed and
//! rendered as an empty field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Readings printed on a soil health card, in card order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilParameter {
    Ph,
    Nitrogen,
    Phosphorus,
    Potassium,
    OrganicCarbon,
    Sulfur,
    Zinc,
    Boron,
    Iron,
    Manganese,
}

impl SoilParameter {
    pub const ALL: [SoilParameter; 10] = [
        SoilParameter::Ph,
        SoilParameter::Nitrogen,
        SoilParameter::Phosphorus,
        SoilParameter::Potassium,
        SoilParameter::OrganicCarbon,
        SoilParameter::Sulfur,
        SoilParameter::Zinc,
        SoilParameter::Boron,
        SoilParameter::Iron,
        SoilParameter::Manganese,
    ];

    /// Form field key
    pub fn key(self) -> &'static str {
        match self {
            SoilParameter::Ph => "ph",
            SoilParameter::Nitrogen => "nitrogen",
            SoilParameter::Phosphorus => "phosphorus",
            SoilParameter::Potassium => "potassium",
            SoilParameter::OrganicCarbon => "organic_carbon",
            SoilParameter::Sulfur => "sulfur",
            SoilParameter::Zinc => "zinc",
            SoilParameter::Boron => "boron",
            SoilParameter::Iron => "iron",
            SoilParameter::Manganese => "manganese",
        }
    }

    pub fn from_key(key: &str) -> Option<SoilParameter> {
        SoilParameter::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for SoilParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Value did not parse as a finite number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotNumeric;

/// Free-form soil readings keyed by parameter
///
/// Empty or whitespace-only input removes the reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilParameterSet {
    values: BTreeMap<SoilParameter, String>,
}

impl SoilParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `raw` for `parameter`; blank input clears the reading
    pub fn set(&mut self, parameter: SoilParameter, raw: &str) -> Result<(), NotNumeric> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.values.remove(&parameter);
            return Ok(());
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                self.values.insert(parameter, trimmed.to_string());
                Ok(())
            }
            _ => Err(NotNumeric),
        }
    }

    /// Text as entered, `None` when the field is empty
    pub fn raw(&self, parameter: SoilParameter) -> Option<&str> {
        self.values.get(&parameter).map(String::as_str)
    }

    /// Parsed value, `None` when the field is empty
    pub fn numeric(&self, parameter: SoilParameter) -> Option<f64> {
        self.raw(parameter).and_then(|v| v.parse().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn filled_count(&self) -> usize {
        self.values.len()
    }

    /// Every parameter in card order with its (possibly empty) value
    pub fn iter(&self) -> impl Iterator<Item = (SoilParameter, Option<&str>)> + '_ {
        SoilParameter::ALL.into_iter().map(move |p| (p, self.raw(p)))
    }
}

/// Status band a reading falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilStatus {
    Optimal,
    High,
    Medium,
    Low,
}

impl SoilStatus {
    /// Badge style used by the page renderer
    pub fn badge_class(self) -> &'static str {
        match self {
            SoilStatus::Optimal => "badge-default",
            SoilStatus::High => "badge-secondary",
            SoilStatus::Medium => "badge-outline",
            SoilStatus::Low => "badge-destructive",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SoilStatus::Optimal => "optimal",
            SoilStatus::High => "high",
            SoilStatus::Medium => "medium",
            SoilStatus::Low => "low",
        }
    }
}

/// One line of the reference dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceReading {
    pub parameter: SoilParameter,
    pub value: f64,
    pub status: SoilStatus,
    pub range: &'static str,
}

const REFERENCE_DATASET: [ReferenceReading; 10] = [
    ReferenceReading { parameter: SoilParameter::Ph, value: 6.8, status: SoilStatus::Optimal, range: "6.5-7.5" },
    ReferenceReading { parameter: SoilParameter::Nitrogen, value: 280.0, status: SoilStatus::Medium, range: "280-560 kg/ha" },
    ReferenceReading { parameter: SoilParameter::Phosphorus, value: 22.0, status: SoilStatus::High, range: "10-25 kg/ha" },
    ReferenceReading { parameter: SoilParameter::Potassium, value: 240.0, status: SoilStatus::Medium, range: "280-560 kg/ha" },
    ReferenceReading { parameter: SoilParameter::OrganicCarbon, value: 0.65, status: SoilStatus::Medium, range: "0.5-0.75%" },
    ReferenceReading { parameter: SoilParameter::Sulfur, value: 12.0, status: SoilStatus::Low, range: "10-20 ppm" },
    ReferenceReading { parameter: SoilParameter::Zinc, value: 0.8, status: SoilStatus::Medium, range: "0.6-1.2 ppm" },
    ReferenceReading { parameter: SoilParameter::Boron, value: 0.5, status: SoilStatus::Low, range: "0.5-1.0 ppm" },
    ReferenceReading { parameter: SoilParameter::Iron, value: 8.2, status: SoilStatus::Optimal, range: "4.5-15.0 ppm" },
    ReferenceReading { parameter: SoilParameter::Manganese, value: 3.5, status: SoilStatus::Optimal, range: "1.0-5.0 ppm" },
];

/// Fixed sample readings shown when no card data is parsed
pub fn reference_dataset() -> &'static [ReferenceReading] {
    &REFERENCE_DATASET
}

/// Reference line for one parameter
pub fn reference_reading(parameter: SoilParameter) -> &'static ReferenceReading {
    // REFERENCE_DATASET is declared in SoilParameter::ALL order
    &REFERENCE_DATASET[parameter as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_dataset_matches_parameter_order() {
        for (i, reading) in reference_dataset().iter().enumerate() {
            assert_eq!(reading.parameter, SoilParameter::ALL[i]);
            assert_eq!(reference_reading(reading.parameter).parameter, reading.parameter);
        }
    }

    #[test]
    fn test_set_accepts_numbers_and_clears_on_blank() {
        let mut set = SoilParameterSet::new();
        set.set(SoilParameter::Ph, " 6.9 ").unwrap();
        assert_eq!(set.raw(SoilParameter::Ph), Some("6.9"));
        assert_eq!(set.numeric(SoilParameter::Ph), Some(6.9));

        set.set(SoilParameter::Ph, "").unwrap();
        assert_eq!(set.raw(SoilParameter::Ph), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_rejects_non_numeric() {
        let mut set = SoilParameterSet::new();
        assert_eq!(set.set(SoilParameter::Zinc, "lots"), Err(NotNumeric));
        assert_eq!(set.set(SoilParameter::Zinc, "NaN"), Err(NotNumeric));
        assert_eq!(set.set(SoilParameter::Zinc, "inf"), Err(NotNumeric));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_yields_all_parameters_in_card_order() {
        let mut set = SoilParameterSet::new();
        set.set(SoilParameter::Iron, "8").unwrap();
        let rows: Vec<_> = set.iter().collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], (SoilParameter::Ph, None));
        assert_eq!(rows[8], (SoilParameter::Iron, Some("8")));
        assert_eq!(set.filled_count(), 1);
    }

    #[test]
    fn test_parameter_key_lookup() {
        assert_eq!(SoilParameter::from_key("organic_carbon"), Some(SoilParameter::OrganicCarbon));
        assert_eq!(SoilParameter::from_key("calcium"), None);
    }

    #[test]
    fn test_serializes_as_keyed_object() {
        let mut set = SoilParameterSet::new();
        set.set(SoilParameter::Nitrogen, "300").unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["values"]["nitrogen"], "300");
    }
}
