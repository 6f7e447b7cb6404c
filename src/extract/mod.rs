mod amount;
mod category;
mod date;
mod kind;
mod notes;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::models::{Category, TransactionKind};

pub use amount::{extract_amount, extract_anchored_amount};
pub use category::extract_category;
pub use date::{extract_date, extract_time};
pub use kind::extract_kind;
pub use notes::{extract_marked_note, receipt_header_note};

/// Fields recovered from one piece of recognized text.
///
/// Every field is optional: `None` always means "the text said nothing about
/// this", never "clear the field". The merge engine relies on that reading to
/// keep earlier answers when later text is silent.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ExtractedFields {
    pub amount: Option<Decimal>,
    pub kind: Option<TransactionKind>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub notes: Option<String>
}

/// Scans a finalized voice transcript.
///
/// Spoken phrases carry amounts, direction keywords, category names and a
/// marked trailing note. Dates and times are never taken from speech, the
/// seeded form values stand until the operator edits them.
pub fn scan_transcript(text: &str) -> ExtractedFields {
    ExtractedFields {
        amount: extract_amount(text),
        kind: extract_kind(text),
        category: extract_category(text),
        date: None,
        time: None,
        notes: extract_marked_note(text)
    }
}

/// Scans OCR text lifted from a receipt photo.
///
/// Amounts only count when anchored to a currency marker, so line numbers
/// and phone numbers on the slip are ignored. Receipts record purchases, so
/// the kind falls back to expense when no keyword says otherwise. A clock
/// time is only trusted when the slip also carries a date.
pub fn scan_receipt_text(text: &str) -> ExtractedFields {
    let date = extract_date(text);

    ExtractedFields {
        amount: extract_anchored_amount(text),
        kind: Some(extract_kind(text).unwrap_or(TransactionKind::Expense)),
        category: extract_category(text),
        date,
        time: date.and_then(|_| extract_time(text)),
        notes: Some(receipt_header_note(text))
    }
}
