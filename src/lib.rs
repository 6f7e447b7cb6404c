//! Capture engine for a hands-free Thai expense tracker: turns recognized
//! voice and receipt text into transaction drafts and submits confirmed
//! drafts to the ledger service.

pub mod engine;
pub mod extract;
pub mod lexicon;
pub mod models;
pub mod submit;

pub use engine::{CaptureSession, SessionReplay};
pub use extract::ExtractedFields;
pub use models::{
    Category, RecognitionEvent, RecognitionSource, TransactionDraft, TransactionKind,
};
pub use submit::{HttpTransactionApi, TransactionApi, TransactionPayload};
