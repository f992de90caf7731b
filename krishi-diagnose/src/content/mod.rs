//! Localized page content
//!
//! One [`ContentBundle`] per language with every field filled. Lookup never
//! fails: languages without a bundle (and unknown keys) get English.

mod en;
mod hi;
mod mr;
mod pa;

use serde::Serialize;

use crate::models::{DiagnosisPayload, Severity, SoilParameter};
use krishi_common::Language;

#[derive(Debug, Serialize)]
pub struct SeverityLabels {
    pub low: &'static str,
    pub medium: &'static str,
    pub high: &'static str,
}

impl SeverityLabels {
    pub fn label(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActionLabels {
    pub retake: &'static str,
    pub speak_results: &'static str,
    pub get_help: &'static str,
    pub back: &'static str,
}

/// Localized text of the leaf spot sample diagnosis
#[derive(Debug, Serialize)]
pub struct SampleResults {
    pub disease: &'static str,
    pub description: &'static str,
    pub treatment: &'static str,
    pub prevention: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SoilLabels {
    pub ph: &'static str,
    pub nitrogen: &'static str,
    pub phosphorus: &'static str,
    pub potassium: &'static str,
    pub organic_carbon: &'static str,
    pub sulfur: &'static str,
    pub zinc: &'static str,
    pub boron: &'static str,
    pub iron: &'static str,
    pub manganese: &'static str,
}

impl SoilLabels {
    pub fn label(&self, parameter: SoilParameter) -> &'static str {
        match parameter {
            SoilParameter::Ph => self.ph,
            SoilParameter::Nitrogen => self.nitrogen,
            SoilParameter::Phosphorus => self.phosphorus,
            SoilParameter::Potassium => self.potassium,
            SoilParameter::OrganicCarbon => self.organic_carbon,
            SoilParameter::Sulfur => self.sulfur,
            SoilParameter::Zinc => self.zinc,
            SoilParameter::Boron => self.boron,
            SoilParameter::Iron => self.iron,
            SoilParameter::Manganese => self.manganese,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PhotoTips {
    pub photo_tips: &'static str,
    pub tip1: &'static str,
    pub tip2: &'static str,
    pub tip3: &'static str,
    pub tip4: &'static str,
}

impl PhotoTips {
    pub fn tips(&self) -> [&'static str; 4] {
        [self.tip1, self.tip2, self.tip3, self.tip4]
    }
}

/// Strings used by the server-rendered page around the workflow forms
#[derive(Debug, Serialize)]
pub struct PageLabels {
    pub diagnose_tab: &'static str,
    pub soil_prompt: &'static str,
    pub card_prompt: &'static str,
    pub card_data_note: &'static str,
    pub view_reference: &'static str,
    pub submit_data: &'static str,
    pub cancel: &'static str,
    pub enter_value: &'static str,
    pub complete: &'static str,
    pub analyzed_image: &'static str,
    pub treatment: &'static str,
    pub prevention: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ContentBundle {
    pub language: Language,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub upload_prompt: &'static str,
    pub take_photo: &'static str,
    pub upload_image: &'static str,
    pub analyzing: &'static str,
    pub results: &'static str,
    pub confidence: &'static str,
    pub recommendations: &'static str,
    pub soil_health: &'static str,
    pub soil_health_card: &'static str,
    pub has_card: &'static str,
    pub no_card: &'static str,
    pub upload_card: &'static str,
    pub enter_aadhaar: &'static str,
    pub link_aadhaar: &'static str,
    pub soil_parameters: &'static str,
    pub location_details: &'static str,
    pub select_state: &'static str,
    pub select_district: &'static str,
    pub select_city: &'static str,
    pub manual_entry: &'static str,
    pub severity: SeverityLabels,
    pub actions: ActionLabels,
    pub sample_results: SampleResults,
    pub soil_data: SoilLabels,
    pub tips: PhotoTips,
    pub page: PageLabels,
}

/// Bundle for `language`; kn and ta have no translation yet and get English
pub fn bundle(language: Language) -> &'static ContentBundle {
    match language {
        Language::En | Language::Kn | Language::Ta => &en::BUNDLE,
        Language::Hi => &hi::BUNDLE,
        Language::Mr => &mr::BUNDLE,
        Language::Pa => &pa::BUNDLE,
    }
}

/// Bundle for a raw language key; unknown keys get English
pub fn bundle_for(key: &str) -> &'static ContentBundle {
    bundle(Language::from_key_or_default(key))
}

/// Condition id of the sample diagnosis the bundles translate
const LEAF_SPOT: &str = "leaf_spot";

/// Payload with texts swapped for the bundle's translation when one exists
pub fn localized_diagnosis(bundle: &ContentBundle, payload: &DiagnosisPayload) -> DiagnosisPayload {
    let mut localized = payload.clone();
    if payload.condition == LEAF_SPOT {
        let sample = &bundle.sample_results;
        localized.disease = sample.disease.to_string();
        localized.description = sample.description.to_string();
        localized.treatment = sample.treatment.to_string();
        localized.prevention = sample.prevention.to_string();
    }
    localized
}
