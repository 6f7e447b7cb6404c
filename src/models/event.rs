use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::errors::RecognitionError;

/// Largest receipt image the recognition pipeline accepts, 10 MiB.
pub const MAX_RECEIPT_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Content types the receipt OCR service can decode.
pub const SUPPORTED_RECEIPT_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Which recognition channel produced a piece of text.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionSource {
    /// Speech-to-text transcript of the operator talking.
    Voice,
    /// OCR text lifted from a photographed receipt.
    Image
}

impl fmt::Display for RecognitionSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Voice => write!(formatter, "voice"),
            Self::Image => write!(formatter, "image")
        }
    }
}

/// One completed recognition result handed to the capture session.
///
/// The session only ever sees finalized text. Partial speech hypotheses and
/// the raw image bytes stay inside the recognition layer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RecognitionEvent {
    pub source: RecognitionSource,
    pub text: String
}

impl RecognitionEvent {
    pub fn voice(text: impl Into<String>) -> Self {
        Self {
            source: RecognitionSource::Voice,
            text: text.into()
        }
    }

    pub fn image(text: impl Into<String>) -> Self {
        Self {
            source: RecognitionSource::Image,
            text: text.into()
        }
    }
}

/// Checks a receipt image against the upload limits before any bytes are
/// sent to the OCR service.
///
/// # Errors
/// Returns `RecognitionError` if the content type is not JPEG or PNG, or the
/// file exceeds [`MAX_RECEIPT_IMAGE_BYTES`].
pub fn validate_receipt_upload(content_type: &str, size_bytes: u64) -> Result<(), RecognitionError> {
    if !SUPPORTED_RECEIPT_IMAGE_TYPES.contains(&content_type) {
        return Err(RecognitionError::unsupported_image_type(content_type));
    }

    if size_bytes > MAX_RECEIPT_IMAGE_BYTES {
        return Err(RecognitionError::image_too_large(size_bytes));
    }

    Ok(())
}
