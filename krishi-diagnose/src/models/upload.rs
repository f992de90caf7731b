//! Files read from the farmer's device, carried as data URIs

use serde::{Deserialize, Serialize};

/// `data:<mime>;base64,<payload>` string produced by the intake boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadedImage(String);

impl UploadedImage {
    /// Wrap an existing data URI; `None` unless it has the `data:` shape
    pub fn from_data_uri(uri: impl Into<String>) -> Option<Self> {
        let uri = uri.into();
        let rest = uri.strip_prefix("data:")?;
        let (header, _) = rest.split_once(',')?;
        if header.is_empty() {
            return None;
        }
        Some(Self(uri))
    }

    pub(crate) fn from_parts(mime_type: &str, base64_payload: &str) -> Self {
        Self(format!("data:{};base64,{}", mime_type, base64_payload))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type from the data URI header
    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split([';', ',']).next())
            .unwrap_or("application/octet-stream")
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type() == "application/pdf"
    }
}
