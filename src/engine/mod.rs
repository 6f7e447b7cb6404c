mod merge;
mod replay;
mod session;
#[cfg(test)]
mod tests;

pub use merge::{apply_fields, merge_transcript, receipt_candidate};
pub use replay::{SessionOp, SessionOpKind, SessionReplay};
pub use session::CaptureSession;
