use thiserror::Error;

use crate::models::ValidationError;

/// Everything that can stop a draft from becoming a stored transaction.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The draft failed the submission gate; nothing left the process.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// A submission for this draft is still awaiting its outcome.
    #[error("A submission is already in flight for this draft")]
    AlreadyInFlight,
    /// The ledger service answered with a non-success status.
    #[error("Ledger service rejected the submission ({status}): {message}")]
    Rejected {
        status: u16,
        message: String
    },
    /// The request never produced an HTTP response.
    #[error("Could not reach the ledger service")]
    Connectivity(#[from] reqwest::Error)
}
