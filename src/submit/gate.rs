use chrono::{DateTime, FixedOffset, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::lexicon;
use crate::models::{Category, TransactionDraft, TransactionKind, ValidationError};

/// The JSON body accepted by the ledger service.
///
/// `amount` goes over the wire as a JSON number and `date` as an RFC 3339
/// timestamp carrying the +07:00 offset. `notes` is left out entirely when
/// the draft had none.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionPayload {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    pub date: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>
}

/// The submission gate: validates a draft and shapes it for the wire.
///
/// Checks are ordered so the first failure names the field the operator
/// should fix: the amount must be present and positive, the date present and
/// no later than today in local time. A draft without a time stamps the
/// current local time, matching the seeded form value it would have shown.
///
/// # Errors
/// Returns `ValidationError` if the amount is missing, zero or negative, or
/// the date is missing or in the future.
pub fn build_payload(
    draft: &TransactionDraft,
    now: DateTime<FixedOffset>
) -> Result<TransactionPayload, ValidationError> {
    let amount = match draft.amount {
        Some(amount) if amount > Decimal::ZERO => amount,
        _ => return Err(ValidationError::AmountRequired)
    };

    let date = draft.date.ok_or(ValidationError::DateRequired)?;

    if date > now.date_naive() {
        return Err(ValidationError::FutureDate { date });
    }

    let time = draft.time.unwrap_or_else(|| current_minute(now));
    let offset = lexicon::local_offset();
    // The wall-clock reading shifted back by the offset is the UTC instant.
    let timestamp = DateTime::from_naive_utc_and_offset(
        date.and_time(time) - chrono::Duration::seconds(offset.local_minus_utc().into()),
        offset
    );

    Ok(TransactionPayload {
        amount,
        kind: draft.kind,
        category: draft.category,
        date: timestamp,
        notes: (!draft.notes.is_empty()).then(|| draft.notes.clone())
    })
}

fn current_minute(now: DateTime<FixedOffset>) -> NaiveTime {
    NaiveTime::from_hms_opt(now.time().hour(), now.time().minute(), 0)
        .unwrap_or_else(|| now.time())
}
