//! Data models for krishi-diagnose
//!
//! - `soil`: soil parameter sets, reference readings and their status
//! - `diagnosis`: analysis payload returned by the backend
//! - `upload`: data-URI wrapper for files read from the farmer's device

pub mod diagnosis;
pub mod soil;
pub mod upload;

pub use diagnosis::{DiagnosisPayload, Severity};
pub use soil::{reference_dataset, ReferenceReading, SoilParameter, SoilParameterSet, SoilStatus};
pub use upload::UploadedImage;
