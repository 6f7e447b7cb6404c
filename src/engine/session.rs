use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::engine::merge::{merge_transcript, receipt_candidate};
use crate::models::{RecognitionEvent, RecognitionSource, TransactionDraft};
use crate::submit::{build_payload, SubmissionError, TransactionApi, TransactionPayload};

/// One capture session: the live draft, an optional receipt candidate and
/// the submission state.
///
/// Voice results fold straight into the live draft. Receipt results are
/// staged as a candidate the operator must confirm or discard, the live
/// draft does not move until then. Dropping the session abandons everything,
/// nothing is persisted between sessions.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    live: TransactionDraft,
    candidate: Option<TransactionDraft>,
    submission_in_flight: bool
}

impl CaptureSession {
    /// Opens a session with a draft seeded to the current local date and time.
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            live: TransactionDraft::seeded(now),
            candidate: None,
            submission_in_flight: false
        }
    }

    /// The draft as the form currently shows it.
    pub fn live(&self) -> &TransactionDraft {
        &self.live
    }

    /// Mutable access for manual form edits by the operator.
    pub fn live_mut(&mut self) -> &mut TransactionDraft {
        &mut self.live
    }

    /// The staged receipt draft awaiting confirmation, if any.
    pub fn candidate(&self) -> Option<&TransactionDraft> {
        self.candidate.as_ref()
    }

    pub fn submission_in_flight(&self) -> bool {
        self.submission_in_flight
    }

    /// Routes one recognition result into the session.
    ///
    /// Voice events update the live draft in place. Image events replace any
    /// previously staged candidate, only the newest scan is offered to the
    /// operator.
    pub fn apply(&mut self, event: &RecognitionEvent) {
        match event.source {
            RecognitionSource::Voice => {
                self.live = merge_transcript(&self.live, &event.text);
                debug!("Merged voice transcript into live draft: {:?}", self.live);
            }
            RecognitionSource::Image => {
                let candidate = receipt_candidate(&self.live, &event.text);
                debug!("Staged receipt candidate: {candidate:?}");
                self.candidate = Some(candidate);
            }
        }
    }

    /// Promotes the staged candidate to the live draft.
    ///
    /// Returns `false` when no candidate was staged, which leaves the live
    /// draft untouched.
    pub fn confirm_candidate(&mut self) -> bool {
        match self.candidate.take() {
            Some(candidate) => {
                self.live = candidate;
                true
            }
            None => false
        }
    }

    /// Throws the staged candidate away, keeping the live draft as is.
    pub fn discard_candidate(&mut self) {
        self.candidate = None;
    }

    /// Validates the live draft and marks the session as submitting.
    ///
    /// The returned payload is ready to send. The caller must report the
    /// outcome through [`Self::complete_submission`]; until then further
    /// submission attempts are refused.
    ///
    /// # Errors
    /// Returns `SubmissionError` if a submission is already in flight or the
    /// draft fails validation.
    pub fn begin_submission(
        &mut self,
        now: DateTime<FixedOffset>
    ) -> Result<TransactionPayload, SubmissionError> {
        if self.submission_in_flight {
            return Err(SubmissionError::AlreadyInFlight);
        }

        let payload = build_payload(&self.live, now)?;
        self.submission_in_flight = true;

        Ok(payload)
    }

    /// Records the outcome of an in-flight submission.
    ///
    /// An accepted submission resets the session to a fresh seeded draft. A
    /// rejected one keeps the draft so the operator can correct and retry.
    pub fn complete_submission(&mut self, accepted: bool, now: DateTime<FixedOffset>) {
        self.submission_in_flight = false;

        if accepted {
            self.reset(now);
        }
    }

    /// Validates the live draft, sends it through the given API and settles
    /// the session according to the outcome.
    ///
    /// # Errors
    /// Returns `SubmissionError` if validation fails, a submission is already
    /// in flight, or the API call does not succeed.
    pub async fn submit<A>(
        &mut self,
        api: &A,
        now: DateTime<FixedOffset>
    ) -> Result<(), SubmissionError>
    where
        A: TransactionApi + ?Sized
    {
        let payload = self.begin_submission(now)?;
        let outcome = api.create(&payload).await;
        self.complete_submission(outcome.is_ok(), now);

        if let Err(error) = &outcome {
            warn!("Submission did not go through: {error}");
        }

        outcome
    }

    /// Returns the session to its opening state: fresh seeded draft, no
    /// candidate, no submission in flight.
    pub fn reset(&mut self, now: DateTime<FixedOffset>) {
        *self = Self::new(now);
    }
}
