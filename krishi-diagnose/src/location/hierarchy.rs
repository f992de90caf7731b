//! Location hierarchy store: State → District → City/Village
//!
//! Read-only after construction. Every listing preserves declared order.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use krishi_common::{Error, Result};

/// District with its cities/villages
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DistrictEntry {
    pub name: String,
    pub cities: Vec<String>,
}

/// State keyed by its short code (e.g. "MH")
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StateEntry {
    pub code: String,
    pub name: String,
    pub districts: Vec<DistrictEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationHierarchy {
    #[serde(rename = "state")]
    states: Vec<StateEntry>,
}

type BuiltinState = (&'static str, &'static str, &'static [(&'static str, [&'static str; 4])]);

const BUILTIN: &[BuiltinState] = &[
    (
        "MH",
        "Maharashtra",
        &[
            ("Mumbai", ["Mumbai City", "Mumbai Suburban", "Thane", "Kalyan"]),
            ("Pune", ["Pune City", "Pimpri-Chinchwad", "Baramati", "Maval"]),
            ("Nashik", ["Nashik City", "Malegaon", "Sinnar", "Dindori"]),
            ("Aurangabad", ["Aurangabad City", "Jalna", "Beed", "Osmanabad"]),
            ("Solapur", ["Solapur City", "Pandharpur", "Barshi", "Karmala"]),
            ("Nagpur", ["Nagpur City", "Wardha", "Bhandara", "Gondia"]),
        ],
    ),
    (
        "KA",
        "Karnataka",
        &[
            ("Bangalore", ["Bangalore Urban", "Bangalore Rural", "Ramanagara", "Tumkur"]),
            ("Mysore", ["Mysore City", "Mandya", "Hassan", "Kodagu"]),
            ("Hubli", ["Hubli-Dharwad", "Gadag", "Haveri", "Uttara Kannada"]),
            ("Mangalore", ["Dakshina Kannada", "Udupu", "Kasaragod", "Chikmagalur"]),
            ("Belgaum", ["Belgaum City", "Bagalkot", "Bijapur", "Gulbarga"]),
        ],
    ),
    (
        "PB",
        "Punjab",
        &[
            ("Ludhiana", ["Ludhiana City", "Khanna", "Samrala", "Payal"]),
            ("Amritsar", ["Amritsar City", "Tarn Taran", "Gurdaspur", "Pathankot"]),
            ("Jalandhar", ["Jalandhar City", "Kapurthala", "Hoshiarpur", "Nawanshahr"]),
            ("Patiala", ["Patiala City", "Rajpura", "Samana", "Patran"]),
            ("Bathinda", ["Bathinda City", "Mansa", "Sardulgarh", "Rampura"]),
        ],
    ),
    (
        "UP",
        "Uttar Pradesh",
        &[
            ("Lucknow", ["Lucknow City", "Barabanki", "Sitapur", "Hardoi"]),
            ("Kanpur", ["Kanpur City", "Kanpur Dehat", "Unnao", "Fatehpur"]),
            ("Agra", ["Agra City", "Mathura", "Firozabad", "Mainpuri"]),
            ("Varanasi", ["Varanasi City", "Jaunpur", "Ghazipur", "Ballia"]),
            ("Allahabad", ["Prayagraj", "Kaushambi", "Pratapgarh", "Sultanpur"]),
            ("Meerut", ["Meerut City", "Ghaziabad", "Gautam Buddha Nagar", "Bulandshahr"]),
        ],
    ),
];

impl LocationHierarchy {
    /// Hierarchy compiled into the binary
    pub fn builtin() -> Self {
        let states = BUILTIN
            .iter()
            .map(|(code, name, districts)| StateEntry {
                code: code.to_string(),
                name: name.to_string(),
                districts: districts
                    .iter()
                    .map(|(district, cities)| DistrictEntry {
                        name: district.to_string(),
                        cities: cities.iter().map(|c| c.to_string()).collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { states }
    }

    /// Parse a hierarchy from TOML (`[[state]]` tables with nested `[[state.districts]]`)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let hierarchy: LocationHierarchy = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Parse location hierarchy failed: {}", e)))?;
        hierarchy.validate()?;
        Ok(hierarchy)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Read location hierarchy {} failed: {}", path.display(), e))
        })?;
        let hierarchy = Self::from_toml_str(&content)?;
        info!(
            "Loaded location hierarchy from {} ({} states)",
            path.display(),
            hierarchy.states.len()
        );
        Ok(hierarchy)
    }

    /// Keys must be non-empty and unique among siblings
    fn validate(&self) -> Result<()> {
        if self.states.is_empty() {
            return Err(Error::Config("location hierarchy has no states".to_string()));
        }
        let mut codes = HashSet::new();
        for state in &self.states {
            if state.code.trim().is_empty() || !codes.insert(state.code.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate or empty state code '{}'",
                    state.code
                )));
            }
            let mut districts = HashSet::new();
            for district in &state.districts {
                if district.name.trim().is_empty() || !districts.insert(district.name.as_str()) {
                    return Err(Error::Config(format!(
                        "duplicate or empty district '{}' in state {}",
                        district.name, state.code
                    )));
                }
                let mut cities = HashSet::new();
                for city in &district.cities {
                    if city.trim().is_empty() || !cities.insert(city.as_str()) {
                        return Err(Error::Config(format!(
                            "duplicate or empty city '{}' in district {}",
                            city, district.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn states(&self) -> &[StateEntry] {
        &self.states
    }

    pub fn state(&self, code: &str) -> Option<&StateEntry> {
        self.states.iter().find(|s| s.code == code)
    }

    fn district_entry(&self, state: &str, district: &str) -> Option<&DistrictEntry> {
        self.state(state)?
            .districts
            .iter()
            .find(|d| d.name == district)
    }

    /// District names under `state`, empty for an unknown state
    pub fn districts(&self, state: &str) -> Vec<&str> {
        self.state(state)
            .map(|s| s.districts.iter().map(|d| d.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// City names under `state`/`district`, empty for an unknown pair
    pub fn cities(&self, state: &str, district: &str) -> Vec<&str> {
        self.district_entry(state, district)
            .map(|d| d.cities.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_district(&self, state: &str, district: &str) -> bool {
        self.district_entry(state, district).is_some()
    }

    pub fn has_city(&self, state: &str, district: &str, city: &str) -> bool {
        self.district_entry(state, district)
            .is_some_and(|d| d.cities.iter().any(|c| c == city))
    }

    /// Display name for a state code, falling back to the code itself
    pub fn state_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.state(code).map(|s| s.name.as_str()).unwrap_or(code)
    }
}

impl Default for LocationHierarchy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_state_order() {
        let h = LocationHierarchy::builtin();
        let codes: Vec<_> = h.states().iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["MH", "KA", "PB", "UP"]);
        assert_eq!(h.state_name("KA"), "Karnataka");
    }

    #[test]
    fn test_districts_keep_declared_order() {
        let h = LocationHierarchy::builtin();
        assert_eq!(
            h.districts("MH"),
            vec!["Mumbai", "Pune", "Nashik", "Aurangabad", "Solapur", "Nagpur"]
        );
        assert_eq!(
            h.cities("MH", "Pune"),
            vec!["Pune City", "Pimpri-Chinchwad", "Baramati", "Maval"]
        );
    }

    #[test]
    fn test_unknown_keys_yield_empty_lists() {
        let h = LocationHierarchy::builtin();
        assert!(h.districts("XX").is_empty());
        assert!(h.cities("MH", "Ludhiana").is_empty());
        assert!(!h.has_district("PB", "Pune"));
        assert!(h.has_city("PB", "Ludhiana", "Khanna"));
        assert!(!h.has_city("PB", "Ludhiana", "Baramati"));
    }

    #[test]
    fn test_from_toml_preserves_order() {
        let h = LocationHierarchy::from_toml_str(
            r#"
            [[state]]
            code = "GJ"
            name = "Gujarat"

            [[state.districts]]
            name = "Surat"
            cities = ["Surat City", "Bardoli"]

            [[state.districts]]
            name = "Anand"
            cities = ["Anand City"]
            "#,
        )
        .unwrap();
        assert_eq!(h.districts("GJ"), vec!["Surat", "Anand"]);
        assert_eq!(h.cities("GJ", "Surat"), vec!["Surat City", "Bardoli"]);
    }

    #[test]
    fn test_duplicate_district_rejected() {
        let err = LocationHierarchy::from_toml_str(
            r#"
            [[state]]
            code = "GJ"
            name = "Gujarat"
            [[state.districts]]
            name = "Surat"
            cities = []
            [[state.districts]]
            name = "Surat"
            cities = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_hierarchy_rejected() {
        assert!(LocationHierarchy::from_toml_str("state = []").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.toml");
        std::fs::write(
            &path,
            "[[state]]\ncode = \"RJ\"\nname = \"Rajasthan\"\n\n[[state.districts]]\nname = \"Jaipur\"\ncities = [\"Jaipur City\", \"Amer\"]\n",
        )
        .unwrap();

        let h = LocationHierarchy::load(&path).unwrap();
        assert_eq!(h.cities("RJ", "Jaipur"), vec!["Jaipur City", "Amer"]);

        let missing = LocationHierarchy::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, Error::Config(_)));
    }
}
