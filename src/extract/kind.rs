use crate::lexicon::{EXPENSE_KEYWORDS, INCOME_KEYWORDS};
use crate::models::TransactionKind;

/// Classifies the text as income or expense by keyword.
///
/// Income keywords are checked first; a phrase containing both "รับ" and
/// "จ่าย" counts as income. Text with no keyword returns `None` so the form's
/// current selection survives.
pub fn extract_kind(text: &str) -> Option<TransactionKind> {
    let haystack = text.to_lowercase();

    if INCOME_KEYWORDS.iter().any(|keyword| haystack.contains(keyword)) {
        return Some(TransactionKind::Income);
    }

    if EXPENSE_KEYWORDS.iter().any(|keyword| haystack.contains(keyword)) {
        return Some(TransactionKind::Expense);
    }

    None
}
