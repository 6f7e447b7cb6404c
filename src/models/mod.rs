mod draft;
mod errors;
mod event;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use draft::TransactionDraft;
pub use errors::{RecognitionError, ValidationError};
pub use event::{
    validate_receipt_upload, RecognitionEvent, RecognitionSource, MAX_RECEIPT_IMAGE_BYTES,
    SUPPORTED_RECEIPT_IMAGE_TYPES,
};

/// Whether a transaction brings money in or pays money out.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(formatter, "income"),
            Self::Expense => write!(formatter, "expense")
        }
    }
}

/// Spending categories as they appear in the ledger UI and on the wire.
///
/// The declaration order doubles as the classifier priority: when a phrase
/// mentions several category labels, the earliest variant here wins.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "อาหาร")]
    Food,
    #[serde(rename = "ค่าเดินทาง")]
    Travel,
    #[serde(rename = "ที่อยู่อาศัย")]
    Housing,
    #[serde(rename = "บันเทิง")]
    Entertainment,
    #[serde(rename = "ช้อปปิ้ง")]
    Shopping,
    #[serde(rename = "สุขภาพ")]
    Health,
    #[serde(rename = "การศึกษา")]
    Education,
    #[serde(rename = "อื่นๆ")]
    Other
}

impl Category {
    /// Every category in classifier priority order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Travel,
        Category::Housing,
        Category::Entertainment,
        Category::Shopping,
        Category::Health,
        Category::Education,
        Category::Other,
    ];

    /// The Thai label shown to the operator and sent to the ledger service.
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "อาหาร",
            Self::Travel => "ค่าเดินทาง",
            Self::Housing => "ที่อยู่อาศัย",
            Self::Entertainment => "บันเทิง",
            Self::Shopping => "ช้อปปิ้ง",
            Self::Health => "สุขภาพ",
            Self::Education => "การศึกษา",
            Self::Other => "อื่นๆ"
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.label())
    }
}
