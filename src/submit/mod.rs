mod client;
mod errors;
mod gate;

use async_trait::async_trait;

pub use client::HttpTransactionApi;
pub use errors::SubmissionError;
pub use gate::{build_payload, TransactionPayload};

/// The ledger service seen from the capture side.
///
/// Implementations send a gated payload and report whether the service
/// stored it. The session layer only depends on this trait, tests swap in
/// in-memory doubles.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    async fn create(&self, payload: &TransactionPayload) -> Result<(), SubmissionError>;
}
