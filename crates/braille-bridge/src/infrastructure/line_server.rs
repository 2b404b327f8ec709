//! JSON-lines server: one request per input line, one response per output line.
//!
//! ```text
//! stdin  ─▶ {"text":"hola","direction":"TO_BRAILLE"}
//! stdout ◀─ {"success":true,"originalText":"hola","translatedText":"⠓⠕⠇⠁","direction":"TO_BRAILLE"}
//! ```
//!
//! The loop runs until the input reaches EOF or the `running` flag is cleared
//! (by the Ctrl+C handler in `main.rs`).  Blank lines are skipped.  A line
//! that is not a valid request gets a failure response and the loop carries
//! on; only I/O errors end it early.
//!
//! # Why a dedicated stdin thread? (for beginners)
//!
//! `tokio::io::stdin()` performs each read on Tokio's blocking thread pool, and
//! a runtime waits for its blocking pool when it shuts down.  A read stuck on
//! an idle terminal would therefore keep the process alive after Ctrl+C.
//! [`spawn_line_reader`] instead reads on a plain OS thread that is never
//! joined and hands lines over an `mpsc` channel, so returning from `main`
//! ends the process even while that thread is still blocked.
//!
//! [`serve_lines`] is generic over the reader and writer so tests can drive it
//! with in-memory buffers instead of real stdin/stdout.

use std::io::{self, BufRead};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::application::TranslationService;
use crate::domain::{TranslationRequest, TranslationResponse};

/// How often the loop wakes up to check the `running` flag while idle.
const SHUTDOWN_POLL: Duration = Duration::from_millis(200);

/// Lines buffered between the reader thread and the request loop.
const LINE_BUFFER: usize = 64;

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    /// Non-blank lines answered.
    pub requests: u64,
    /// Responses with `success: false`.
    pub failures: u64,
}

// ── Line sources ──────────────────────────────────────────────────────────────

/// Something the request loop can pull lines from.
///
/// `read_line` must be cancel-safe: the loop races it against a timeout.
trait LineSource {
    async fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: AsyncBufRead + Unpin> LineSource for Lines<R> {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.next_line().await
    }
}

impl LineSource for mpsc::Receiver<io::Result<String>> {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.recv().await.transpose()
    }
}

/// Reads `reader` line by line on a new OS thread.
///
/// The channel closes at EOF, after the first read error (which is forwarded),
/// or when the receiver is dropped.
///
/// # Errors
///
/// Returns an error if the thread cannot be spawned.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<mpsc::Receiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);
    thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })?;
    Ok(rx)
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Serves requests from stdin to stdout until EOF or shutdown.
///
/// # Errors
///
/// Returns an error if the reader thread cannot be started, or if reading
/// stdin or writing stdout fails.
pub async fn run_stdio(
    service: &TranslationService,
    running: Arc<AtomicBool>,
) -> anyhow::Result<ServeStats> {
    let lines = spawn_line_reader(io::BufReader::new(io::stdin()))
        .context("failed to start stdin reader")?;
    serve_channel(service, lines, tokio::io::stdout(), running).await
}

/// Answers every request line from `reader` on `writer`.
///
/// # Errors
///
/// Returns an error if reading a line, or writing or flushing a response,
/// fails.
pub async fn serve_lines<R, W>(
    service: &TranslationService,
    reader: R,
    writer: W,
    running: Arc<AtomicBool>,
) -> anyhow::Result<ServeStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    serve_from(service, reader.lines(), writer, running).await
}

/// Answers every request line received on `lines` on `writer`.
///
/// Pair with [`spawn_line_reader`] for blocking inputs such as stdin.
///
/// # Errors
///
/// Returns an error if the reader reported a read error, or writing or
/// flushing a response fails.
pub async fn serve_channel<W>(
    service: &TranslationService,
    lines: mpsc::Receiver<io::Result<String>>,
    writer: W,
    running: Arc<AtomicBool>,
) -> anyhow::Result<ServeStats>
where
    W: AsyncWrite + Unpin,
{
    serve_from(service, lines, writer, running).await
}

// ── Request loop ──────────────────────────────────────────────────────────────

async fn serve_from<S, W>(
    service: &TranslationService,
    mut lines: S,
    mut writer: W,
    running: Arc<AtomicBool>,
) -> anyhow::Result<ServeStats>
where
    S: LineSource,
    W: AsyncWrite + Unpin,
{
    let mut stats = ServeStats::default();

    loop {
        if !running.load(Ordering::Relaxed) {
            info!("shutdown flag set; stopping request loop");
            break;
        }

        let line = match timeout(SHUTDOWN_POLL, lines.read_line()).await {
            Ok(Ok(Some(line))) => line,
            Ok(Ok(None)) => {
                debug!("input closed");
                break;
            }
            Ok(Err(e)) => return Err(e).context("failed to read request line"),
            Err(_) => continue,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = respond(service, line);
        stats.requests += 1;
        if !response.success {
            stats.failures += 1;
        }

        let mut json = serde_json::to_string(&response).context("failed to encode response")?;
        json.push('\n');
        writer
            .write_all(json.as_bytes())
            .await
            .context("failed to write response")?;
        writer.flush().await.context("failed to flush response")?;
    }

    info!(
        requests = stats.requests,
        failures = stats.failures,
        "request loop finished"
    );
    Ok(stats)
}

/// Decodes one request line and processes it.
fn respond(service: &TranslationService, line: &str) -> TranslationResponse {
    match serde_json::from_str::<TranslationRequest>(line) {
        Ok(request) => service.process(&request),
        Err(e) => {
            debug!(error = %e, "malformed request line");
            TranslationResponse::failure(format!("invalid request: {e}"))
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
