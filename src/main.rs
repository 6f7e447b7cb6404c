use std::env;
use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use ledger_capture::lexicon;
use ledger_capture::submit::build_payload;
use ledger_capture::{
    CaptureSession, HttpTransactionApi, SessionReplay, TransactionDraft, TransactionPayload,
};

/// What a replayed session ended up with: the final draft plus either the
/// payload the gate would send or the reason it refused.
#[derive(Serialize)]
struct ReplayOutcome<'a> {
    draft: &'a TransactionDraft,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<TransactionPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: ledger-capture [session].csv [log_level:optional] > [outcome].json");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        eprintln!("Set LEDGER_API_TOKEN (and optionally LEDGER_API_URL) to also submit the gated draft");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let now = Utc::now().with_timezone(&lexicon::local_offset());
    let mut session = CaptureSession::new(now);
    let replay = SessionReplay::new();

    let timer = Instant::now();
    replay.run(&mut session, path).await?;
    let duration = timer.elapsed();

    info!("Replayed session operations in: {duration:?}");

    write_outcome_to_stdout(&session, now)?;
    submit_if_configured(&mut session, now).await?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Because we are doing stdout redirection, we will need to utilize stderr to display logging
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_outcome_to_stdout(session: &CaptureSession, now: DateTime<FixedOffset>) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    let outcome = match build_payload(session.live(), now) {
        Ok(payload) => ReplayOutcome {
            draft: session.live(),
            payload: Some(payload),
            error: None
        },
        Err(error) => ReplayOutcome {
            draft: session.live(),
            payload: None,
            error: Some(error.to_string())
        }
    };

    serde_json::to_writer_pretty(&mut output, &outcome)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}

/// Sends the gated draft to a real ledger service when the environment
/// carries a bearer token; a replay without one stays local. `LEDGER_API_URL`
/// overrides the default service address.
async fn submit_if_configured(
    session: &mut CaptureSession,
    now: DateTime<FixedOffset>
) -> Result<()> {
    let Ok(token) = env::var("LEDGER_API_TOKEN") else {
        return Ok(());
    };

    let mut api = HttpTransactionApi::new(token);
    if let Ok(base_url) = env::var("LEDGER_API_URL") {
        api = api.with_base_url(base_url);
    }

    session.submit(&api, now).await?;

    info!("Transaction submitted to the ledger service");

    Ok(())
}
