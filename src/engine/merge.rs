use crate::extract::{scan_receipt_text, scan_transcript, ExtractedFields};
use crate::models::TransactionDraft;

/// Lays extracted fields over a draft, returning the updated draft.
///
/// Extraction results are partial: a populated field replaces the draft's
/// value, an absent one leaves it alone. Applying the same fields twice
/// yields the same draft as applying them once.
pub fn apply_fields(draft: &TransactionDraft, fields: &ExtractedFields) -> TransactionDraft {
    TransactionDraft {
        amount: fields.amount.or(draft.amount),
        kind: fields.kind.unwrap_or(draft.kind),
        category: fields.category.unwrap_or(draft.category),
        date: fields.date.or(draft.date),
        time: fields.time.or(draft.time),
        notes: fields.notes.clone().unwrap_or_else(|| draft.notes.clone())
    }
}

/// Folds one voice transcript into the live draft.
pub fn merge_transcript(live: &TransactionDraft, transcript: &str) -> TransactionDraft {
    apply_fields(live, &scan_transcript(transcript))
}

/// Builds the candidate draft a receipt scan proposes.
///
/// The candidate starts from the live draft so fields the slip says nothing
/// about, typically the time, survive a later confirmation.
pub fn receipt_candidate(live: &TransactionDraft, ocr_text: &str) -> TransactionDraft {
    apply_fields(live, &scan_receipt_text(ocr_text))
}
