use std::fs::File;
use std::io::BufReader;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{error, warn};

use crate::engine::CaptureSession;
use crate::models::RecognitionEvent;

/// One recorded session operation, a row in a replay CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionOp {
    /// What happened: a recognition result arrived or the operator acted.
    pub op: SessionOpKind,
    /// Recognized text for `voice` and `image` rows, empty otherwise.
    #[serde(default)]
    pub text: String
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionOpKind {
    Voice,
    Image,
    Confirm,
    Discard
}

/// Replays a recorded operation stream against a capture session.
///
/// Rows are fed through a bounded channel and applied strictly in file
/// order, the same ordering the session sees live.
pub struct SessionReplay {
    backpressure: usize
}

impl Default for SessionReplay {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionReplay {
    pub fn new() -> Self {
        Self {
            backpressure: 256
        }
    }

    /// Streams the CSV at `path` into `session`, one operation at a time.
    ///
    /// Unreadable files and malformed rows are logged and skipped so a partial
    /// recording still replays as far as it can.
    pub async fn run(&self, session: &mut CaptureSession, path: &str) -> anyhow::Result<()> {
        let (sender, mut receiver) = mpsc::channel::<SessionOp>(self.backpressure);
        let csv_handle = Self::spawn_csv_reader(path.to_string(), sender);

        while let Some(operation) = receiver.recv().await {
            Self::apply_op(session, operation);
        }

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        Ok(())
    }

    fn apply_op(session: &mut CaptureSession, operation: SessionOp) {
        match operation.op {
            SessionOpKind::Voice => session.apply(&RecognitionEvent::voice(operation.text)),
            SessionOpKind::Image => session.apply(&RecognitionEvent::image(operation.text)),
            SessionOpKind::Confirm => {
                if !session.confirm_candidate() {
                    warn!("Confirm operation arrived with no candidate staged");
                }
            }
            SessionOpKind::Discard => session.discard_candidate()
        }
    }

    fn spawn_csv_reader(path: String, sender: mpsc::Sender<SessionOp>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<SessionOp>() {
                match result {
                    Ok(operation) => {
                        if sender.blocking_send(operation).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        })
    }
}
