use super::{CaptureSession, SessionReplay};

use std::fs;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use crate::models::{Category, RecognitionEvent, TransactionKind, ValidationError};
use crate::submit::{SubmissionError, TransactionApi, TransactionPayload};

const RECEIPT_TEXT: &str = "ร้านอาหาร ABC\n15/08/2025\n250.00 บาท";

fn fixed_now() -> Result<DateTime<FixedOffset>> {
    Ok(DateTime::parse_from_rfc3339("2025-08-20T09:48:00+07:00")?)
}

fn create_replay_csv(operations: &[(&str, &str)]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "op,text")?;

    for (op, text) in operations {
        if text.is_empty() {
            writeln!(file, "{},", op)?;
        } else {
            writeln!(file, "{},\"{}\"", op, text.replace('"', "\"\""))?;
        }
    }

    Ok(file)
}

struct AcceptingApi;

#[async_trait]
impl TransactionApi for AcceptingApi {
    async fn create(&self, _payload: &TransactionPayload) -> Result<(), SubmissionError> {
        Ok(())
    }
}

struct RejectingApi;

#[async_trait]
impl TransactionApi for RejectingApi {
    async fn create(&self, _payload: &TransactionPayload) -> Result<(), SubmissionError> {
        Err(SubmissionError::Rejected {
            status: 400,
            message: "Date and time are required".to_string()
        })
    }
}

struct CapturingApi {
    sent: Mutex<Vec<TransactionPayload>>
}

impl CapturingApi {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new())
        }
    }
}

#[async_trait]
impl TransactionApi for CapturingApi {
    async fn create(&self, payload: &TransactionPayload) -> Result<(), SubmissionError> {
        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

#[test]
fn test_voice_event_updates_live_draft_in_place() -> Result<()> {
    let mut session = CaptureSession::new(fixed_now()?);
    session.apply(&RecognitionEvent::voice("จ่าย 120 ค่าเดินทาง"));

    let live = session.live();

    assert_eq!(live.amount, Some(Decimal::from_str("120")?));
    assert_eq!(live.kind, TransactionKind::Expense);
    assert_eq!(live.category, Category::Travel);
    assert_eq!(live.date, NaiveDate::from_ymd_opt(2025, 8, 20));
    assert_eq!(live.time, NaiveTime::from_hms_opt(9, 48, 0));
    assert!(session.candidate().is_none());

    Ok(())
}

#[test]
fn test_applying_the_same_transcript_twice_changes_nothing() -> Result<()> {
    let transcript = "จ่ายค่ากาแฟ 45 บาท สำหรับ ลูกค้า";
    let mut session = CaptureSession::new(fixed_now()?);

    session.apply(&RecognitionEvent::voice(transcript));
    let after_first = session.live().clone();

    session.apply(&RecognitionEvent::voice(transcript));

    assert_eq!(session.live(), &after_first);

    Ok(())
}

#[test]
fn test_cumulative_transcript_refines_without_unlearning() -> Result<()> {
    let mut session = CaptureSession::new(fixed_now()?);

    session.apply(&RecognitionEvent::voice("จ่าย 50"));
    session.apply(&RecognitionEvent::voice("จ่าย 50 ค่าอาหาร หมายเหตุ ข้าวเช้า"));

    let live = session.live();

    assert_eq!(live.amount, Some(Decimal::from_str("50")?));
    assert_eq!(live.kind, TransactionKind::Expense);
    assert_eq!(live.category, Category::Food);
    assert_eq!(live.notes, "ข้าวเช้า");

    Ok(())
}

#[test]
fn test_later_transcript_overwrites_contradicted_fields() -> Result<()> {
    let mut session = CaptureSession::new(fixed_now()?);

    session.apply(&RecognitionEvent::voice("จ่าย 200 ค่าสุขภาพ"));
    assert_eq!(session.live().category, Category::Health);

    session.apply(&RecognitionEvent::voice("จ่าย 250 ค่าอาหาร"));

    assert_eq!(session.live().amount, Some(Decimal::from_str("250")?));
    assert_eq!(session.live().category, Category::Food);

    Ok(())
}

#[test]
fn test_silent_transcript_leaves_the_draft_alone() -> Result<()> {
    let mut session = CaptureSession::new(fixed_now()?);
    session.apply(&RecognitionEvent::voice("จ่าย 120 ค่าเดินทาง"));

    let before = session.live().clone();
    session.apply(&RecognitionEvent::voice("อากาศวันนี้ดีจัง"));

    assert_eq!(session.live(), &before);

    Ok(())
}

#[test]
fn test_image_event_stages_candidate_without_touching_live() -> Result<()> {
    let mut session = CaptureSession::new(fixed_now()?);
    let before = session.live().clone();

    session.apply(&RecognitionEvent::image(RECEIPT_TEXT));

    assert_eq!(session.live(), &before);

    let candidate = session.candidate().expect("candidate should be staged");

    assert_eq!(candidate.amount, Some(Decimal::from_str("250.00")?));
    assert_eq!(candidate.kind, TransactionKind::Expense);
    assert_eq!(candidate.category, Category::Food);
    assert_eq!(candidate.date, NaiveDate::from_ymd_opt(2025, 8, 15));
    assert_eq!(candidate.notes, "ร้านอาหาร ABC 15/08/2025");

    Ok(())
}

#[test]
fn test_candidate_keeps_live_values_the_receipt_lacks() -> Result<()> {
    // The slip carries no clock time, the seeded form time must survive.
    let mut session = CaptureSession::new(fixed_now()?);
    session.apply(&RecognitionEvent::image(RECEIPT_TEXT));

    let candidate = session.candidate().expect("candidate should be staged");

    assert_eq!(candidate.time, NaiveTime::from_hms_opt(9, 48, 0));

    Ok(())
}

#[test]
fn test_new_scan_replaces_previous_candidate() -> Result<()> {
    let mut session = CaptureSession::new(fixed_now()?);

    session.apply(&RecognitionEvent::image(RECEIPT_TEXT));
    session.apply(&RecognitionEvent::image("ร้านกาแฟ XYZ\n45 บาท"));

    let candidate = session.candidate().expect("candidate should be staged");

    assert_eq!(candidate.amount, Some(Decimal::from_str("45")?));
    assert_eq!(candidate.notes, "ร้านกาแฟ XYZ 45 บาท");

    Ok(())
}

#[test]
fn test_confirm_promotes_the_candidate() -> Result<()> {
    let mut session = CaptureSession::new(fixed_now()?);
    session.apply(&RecognitionEvent::image(RECEIPT_TEXT));

    assert!(session.confirm_candidate());
    assert!(session.candidate().is_none());
    assert_eq!(session.live().amount, Some(Decimal::from_str("250.00")?));
    assert_eq!(session.live().date, NaiveDate::from_ymd_opt(2025, 8, 15));

    Ok(())
}

#[test]
fn test_confirm_without_candidate_reports_false() -> Result<()> {
    let mut session = CaptureSession::new(fixed_now()?);
    let before = session.live().clone();

    assert!(!session.confirm_candidate());
    assert_eq!(session.live(), &before);

    Ok(())
}

#[test]
fn test_discard_drops_candidate_and_keeps_live_draft() -> Result<()> {
    let mut session = CaptureSession::new(fixed_now()?);
    session.apply(&RecognitionEvent::voice("จ่าย 120 ค่าเดินทาง"));
    session.apply(&RecognitionEvent::image(RECEIPT_TEXT));

    session.discard_candidate();

    assert!(session.candidate().is_none());
    assert_eq!(session.live().amount, Some(Decimal::from_str("120")?));
    assert_eq!(session.live().category, Category::Travel);

    Ok(())
}

#[tokio::test]
async fn test_receipt_scan_confirm_and_submit_end_to_end() -> Result<()> {
    let now = fixed_now()?;
    let mut session = CaptureSession::new(now);
    let api = CapturingApi::new();

    session.apply(&RecognitionEvent::image(RECEIPT_TEXT));
    assert!(session.confirm_candidate());

    session.submit(&api, now).await?;

    let sent = api.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].amount, Decimal::from_str("250.00")?);
    assert_eq!(sent[0].kind, TransactionKind::Expense);
    assert_eq!(sent[0].category, Category::Food);
    assert_eq!(sent[0].date.to_rfc3339(), "2025-08-15T09:48:00+07:00");
    assert_eq!(sent[0].notes.as_deref(), Some("ร้านอาหาร ABC 15/08/2025"));

    Ok(())
}

#[tokio::test]
async fn test_operator_edit_overrides_dictated_amount() -> Result<()> {
    // The speaker said 45 but the slip says 54; the operator fixes the form
    // by hand before submitting.
    let now = fixed_now()?;
    let mut session = CaptureSession::new(now);
    let api = CapturingApi::new();

    session.apply(&RecognitionEvent::voice("จ่าย 45 ค่าอาหาร"));
    session.live_mut().amount = Some(Decimal::from_str("54")?);

    session.submit(&api, now).await?;

    let sent = api.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].amount, Decimal::from_str("54")?);
    assert_eq!(sent[0].category, Category::Food);

    Ok(())
}

#[tokio::test]
async fn test_successful_submission_resets_the_session() -> Result<()> {
    let now = fixed_now()?;
    let mut session = CaptureSession::new(now);

    session.apply(&RecognitionEvent::voice("จ่าย 45 ค่าอาหาร"));
    session.submit(&AcceptingApi, now).await?;

    assert_eq!(session.live(), CaptureSession::new(now).live());
    assert!(session.candidate().is_none());
    assert!(!session.submission_in_flight());

    Ok(())
}

#[tokio::test]
async fn test_failed_submission_keeps_the_draft_for_retry() -> Result<()> {
    let now = fixed_now()?;
    let mut session = CaptureSession::new(now);
    session.apply(&RecognitionEvent::voice("จ่าย 45 ค่าอาหาร"));

    let result = session.submit(&RejectingApi, now).await;

    assert!(matches!(result, Err(SubmissionError::Rejected { status: 400, .. })));
    assert_eq!(session.live().amount, Some(Decimal::from_str("45")?));
    assert!(!session.submission_in_flight());

    Ok(())
}

#[tokio::test]
async fn test_submitting_a_draft_without_amount_is_refused() -> Result<()> {
    let now = fixed_now()?;
    let mut session = CaptureSession::new(now);

    let result = session.submit(&AcceptingApi, now).await;

    assert!(matches!(
        result,
        Err(SubmissionError::Invalid(ValidationError::AmountRequired))
    ));
    assert!(!session.submission_in_flight());

    Ok(())
}

#[test]
fn test_second_submission_attempt_is_refused_while_in_flight() -> Result<()> {
    let now = fixed_now()?;
    let mut session = CaptureSession::new(now);
    session.apply(&RecognitionEvent::voice("จ่าย 45 ค่าอาหาร"));

    let payload = session.begin_submission(now)?;
    assert_eq!(payload.amount, Decimal::from_str("45")?);
    assert!(session.submission_in_flight());

    let second = session.begin_submission(now);
    assert!(matches!(second, Err(SubmissionError::AlreadyInFlight)));

    session.complete_submission(true, now);
    assert!(!session.submission_in_flight());

    Ok(())
}

#[tokio::test]
async fn test_replay_applies_operations_in_file_order() -> Result<()> {
    let file = create_replay_csv(&[
        ("voice", "จ่าย 50"),
        ("voice", "จ่าย 50 ค่าอาหาร สำหรับ ข้าวเช้า"),
        ("image", RECEIPT_TEXT),
        ("confirm", ""),
    ])?;

    let mut session = CaptureSession::new(fixed_now()?);
    let replay = SessionReplay::new();
    replay.run(&mut session, file.path().to_str().unwrap()).await?;

    assert_eq!(session.live().amount, Some(Decimal::from_str("250.00")?));
    assert_eq!(session.live().category, Category::Food);
    assert_eq!(session.live().notes, "ร้านอาหาร ABC 15/08/2025");
    assert!(session.candidate().is_none());

    Ok(())
}

#[tokio::test]
async fn test_replay_gracefully_skips_malformed_rows() -> Result<()> {
    let csv_content = "op,text\nvoice,จ่าย 50\nshrug,nonsense\nvoice,ค่าเดินทาง";
    let path = "test_replay_1.csv";
    fs::write(path, csv_content)?;

    let mut session = CaptureSession::new(fixed_now()?);
    let replay = SessionReplay::new();
    replay.run(&mut session, path).await?;
    let _ = fs::remove_file(path);

    assert_eq!(session.live().amount, Some(Decimal::from_str("50")?));
    assert_eq!(session.live().category, Category::Travel);

    Ok(())
}

#[tokio::test]
async fn test_replay_handles_missing_csv_file_without_error() -> Result<()> {
    let mut session = CaptureSession::new(fixed_now()?);
    let before = session.live().clone();
    let replay = SessionReplay::new();

    assert!(replay.run(&mut session, "missing.csv").await.is_ok());
    assert_eq!(session.live(), &before);

    Ok(())
}

#[tokio::test]
async fn test_replay_discard_keeps_live_draft() -> Result<()> {
    let file = create_replay_csv(&[
        ("voice", "จ่าย 120 ค่าเดินทาง"),
        ("image", RECEIPT_TEXT),
        ("discard", ""),
    ])?;

    let mut session = CaptureSession::new(fixed_now()?);
    let replay = SessionReplay::new();
    replay.run(&mut session, file.path().to_str().unwrap()).await?;

    assert_eq!(session.live().amount, Some(Decimal::from_str("120")?));
    assert_eq!(session.live().category, Category::Travel);
    assert!(session.candidate().is_none());

    Ok(())
}
