//! Diagnosis payload returned by an analysis backend

use serde::{Deserialize, Serialize};

/// Risk level attached to a detected condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn badge_class(self) -> &'static str {
        match self {
            Severity::High => "badge-destructive",
            Severity::Medium => "badge-secondary",
            Severity::Low => "badge-default",
        }
    }
}

/// What the analysis found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisPayload {
    /// Stable identifier of the condition, used to pick localized text
    pub condition: String,
    pub disease: String,
    pub description: String,
    pub treatment: String,
    pub prevention: String,
    pub severity: Severity,
    /// Confidence in percent (0-100)
    pub confidence: u8,
}

impl DiagnosisPayload {
    /// The fixed result produced by the simulated backend
    pub fn leaf_spot_sample() -> Self {
        Self {
            condition: "leaf_spot".to_string(),
            disease: "Leaf Spot Disease".to_string(),
            description: "Early signs of fungal infection detected on crop leaves".to_string(),
            treatment: "Apply copper-based fungicide spray every 7-10 days. Ensure proper drainage and avoid overhead watering.".to_string(),
            prevention: "Maintain proper plant spacing for air circulation. Remove infected plant debris regularly.".to_string(),
            severity: Severity::Medium,
            confidence: 87,
        }
    }
}
