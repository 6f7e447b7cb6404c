use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::submit::{SubmissionError, TransactionApi, TransactionPayload};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// HTTP client for the ledger service's transaction endpoint.
///
/// Requests carry the configured bearer token; the service owns persistence
/// and authorization decisions.
pub struct HttpTransactionApi {
    client: Client,
    base_url: String,
    token: String
}

impl HttpTransactionApi {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl TransactionApi for HttpTransactionApi {
    async fn create(&self, payload: &TransactionPayload) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(format!("{}/api/transactions", self.base_url))
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            debug!("Ledger service accepted the transaction");
            return Ok(());
        }

        // The service reports failures as {"message": "..."}.
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|message| message.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("Ledger service returned status {status}"));

        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message
        })
    }
}
