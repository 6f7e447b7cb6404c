use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, TransactionKind};

/// The transaction form as the operator sees it mid-capture.
///
/// `amount`, `date` and `time` are optional because recognition fills the
/// form in incrementally; `kind` and `category` always hold a value because
/// the form renders them as pre-selected choices. Whether the draft is
/// complete enough to submit is decided by the submission gate, not here.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TransactionDraft {
    /// Positive amount in baht, absent until heard or read.
    pub amount: Option<Decimal>,
    /// Income or expense, defaults to expense.
    pub kind: TransactionKind,
    /// Spending category, defaults to the catch-all "อื่นๆ".
    pub category: Category,
    /// Calendar date of the transaction.
    pub date: Option<NaiveDate>,
    /// Wall-clock time of the transaction, minute precision.
    pub time: Option<NaiveTime>,
    /// Free-text note, empty when none was captured.
    pub notes: String
}

impl TransactionDraft {
    /// A blank form with only the pre-selected defaults filled in.
    pub fn empty() -> Self {
        Self {
            amount: None,
            kind: TransactionKind::Expense,
            category: Category::Other,
            date: None,
            time: None,
            notes: String::new()
        }
    }

    /// A fresh form seeded with the current local date and time, the state a
    /// new capture session starts from.
    pub fn seeded(now: DateTime<FixedOffset>) -> Self {
        Self {
            date: Some(now.date_naive()),
            time: NaiveTime::from_hms_opt(now.time().hour(), now.time().minute(), 0),
            ..Self::empty()
        }
    }
}
