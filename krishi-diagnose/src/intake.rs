//! File intake boundary
//!
//! Turns bytes chosen by the farmer into an [`UploadedImage`] data URI. The
//! only check is the accept filter of the input the file came through; the
//! content itself is never parsed.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::IntakeError;
use crate::models::UploadedImage;

/// Which file input the bytes came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    /// `image/*`
    CropPhoto,
    /// `image/*,.pdf`
    SoilCard,
}

impl Accept {
    /// Value for the HTML `accept` attribute
    pub fn html_accept(self) -> &'static str {
        match self {
            Accept::CropPhoto => "image/*",
            Accept::SoilCard => "image/*,.pdf",
        }
    }

    fn allows(self, mime_type: &str) -> bool {
        let is_image = mime_type.starts_with("image/");
        match self {
            Accept::CropPhoto => is_image,
            Accept::SoilCard => is_image || mime_type == "application/pdf",
        }
    }
}

/// Encode `bytes` as a data URI
///
/// Empty input means no file was chosen and yields `Ok(None)`. The MIME type
/// is sniffed from the content, falling back to `declared_type` (usually the
/// request `Content-Type`).
pub fn encode_data_uri(
    bytes: &[u8],
    declared_type: Option<&str>,
    accept: Accept,
) -> Result<Option<UploadedImage>, IntakeError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    let declared = declared_type
        .and_then(|t| t.split(';').next())
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let mime_type = infer::get(bytes)
        .map(|kind| kind.mime_type())
        .or(declared)
        .unwrap_or("application/octet-stream");

    if !accept.allows(mime_type) {
        return Err(IntakeError::UnsupportedType(mime_type.to_string()));
    }
    Ok(Some(UploadedImage::from_parts(mime_type, &STANDARD.encode(bytes))))
}
