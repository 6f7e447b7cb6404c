use chrono::NaiveDate;
use thiserror::Error;

use crate::models::event::MAX_RECEIPT_IMAGE_BYTES;
use crate::models::RecognitionSource;

/// Failures raised by the recognition layer before any text reaches the
/// capture session.
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("Recognition failed for [{channel}] input: {message}")]
    EngineFailure {
        channel: RecognitionSource,
        message: String
    },
    #[error("Unsupported receipt image type [{content_type}], expected JPEG or PNG")]
    UnsupportedImageType {
        content_type: String
    },
    #[error("Receipt image is [{size_bytes}] bytes, the limit is [{limit_bytes}]")]
    ImageTooLarge {
        size_bytes: u64,
        limit_bytes: u64
    }
}

impl RecognitionError {
    pub fn engine_failure(channel: RecognitionSource, message: impl Into<String>) -> Self {
        Self::EngineFailure {
            channel,
            message: message.into(),
        }
    }

    pub fn unsupported_image_type(content_type: impl Into<String>) -> Self {
        Self::UnsupportedImageType {
            content_type: content_type.into(),
        }
    }

    pub fn image_too_large(size_bytes: u64) -> Self {
        Self::ImageTooLarge {
            size_bytes,
            limit_bytes: MAX_RECEIPT_IMAGE_BYTES,
        }
    }
}

/// Reasons a draft is refused by the submission gate.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Amount is required and must be greater than zero")]
    AmountRequired,
    #[error("Transaction date is required")]
    DateRequired,
    #[error("Transaction date [{date}] must not be in the future")]
    FutureDate {
        date: NaiveDate
    }
}
