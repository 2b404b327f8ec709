//! Spanish Braille bridge: entry point.
//!
//! Two ways in:
//!
//! - `translate` converts one text given on the command line (or stdin) and
//!   prints the result, or the full JSON response with `--json`.
//! - `serve` reads JSON requests from stdin, one per line, and writes one JSON
//!   response per line to stdout until EOF or Ctrl+C.
//!
//! # Usage
//!
//! ```text
//! braille-bridge [OPTIONS] <COMMAND>
//!
//! Commands:
//!   translate --direction <DIRECTION> [--json] [TEXT]
//!   serve
//!
//! Options:
//!   --config    <PATH>   TOML config file
//!   --log-level <LEVEL>  Log level when RUST_LOG is unset [default from config: info]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable         | Description                               |
//! |------------------|-------------------------------------------|
//! | `BRAILLE_CONFIG` | Path of the TOML config file              |
//! | `BRAILLE_LOG`    | Log level                                 |
//! | `RUST_LOG`       | Full `tracing` filter; overrides the rest |
//!
//! Logs go to stderr, so stdout carries only translation output.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use braille_bridge::application::TranslationService;
use braille_bridge::domain::{BridgeConfig, TranslationRequest, TranslationResponse};
use braille_bridge::infrastructure::{load_config, run_stdio};
use braille_core::TranslationDirection;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Spanish text ↔ six-dot Unicode Braille.
#[derive(Debug, Parser)]
#[command(
    name = "braille-bridge",
    about = "Translate between Spanish text and Unicode Braille",
    version
)]
struct Cli {
    /// TOML configuration file.  A missing file means defaults.
    #[arg(long, global = true, env = "BRAILLE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set.  Overrides the config file.
    #[arg(long, global = true, env = "BRAILLE_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate one text and print the result.
    Translate {
        /// Conversion to run.
        #[arg(long, value_enum)]
        direction: DirectionArg,

        /// Print the full JSON response instead of the bare text.
        #[arg(long)]
        json: bool,

        /// Text to translate.  Read from stdin when omitted.
        text: Option<String>,
    },

    /// Answer JSON-lines requests on stdin until EOF or Ctrl+C.
    Serve,
}

/// Command-line spelling of [`TranslationDirection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    ToBraille,
    ToText,
    ToBrailleMirrored,
}

impl From<DirectionArg> for TranslationDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::ToBraille => TranslationDirection::ToBraille,
            DirectionArg::ToText => TranslationDirection::ToText,
            DirectionArg::ToBrailleMirrored => TranslationDirection::ToBrailleMirrored,
        }
    }
}

impl Cli {
    /// Loads the config file and applies CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load_bridge_config(&self) -> anyhow::Result<BridgeConfig> {
        let mut config = load_config(self.config.as_deref()).with_context(|| match &self.config {
            Some(path) => format!("failed to load config from '{}'", path.display()),
            None => "failed to load config".to_string(),
        })?;

        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        Ok(config)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_bridge_config()?;

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins when set; otherwise the configured level applies.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let service = TranslationService::new(config);

    match cli.command {
        Command::Translate {
            direction,
            json,
            text,
        } => translate(&service, direction.into(), json, text).await,
        Command::Serve => serve(&service).await,
    }
}

/// Runs the `translate` subcommand.
async fn translate(
    service: &TranslationService,
    direction: TranslationDirection,
    json: bool,
    text: Option<String>,
) -> anyhow::Result<ExitCode> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read text from stdin")?;
            buf
        }
    };

    let response = service.process(&TranslationRequest::new(text, direction));

    if json {
        println!("{}", render_json(&response, service.config().pretty)?);
    } else if let Some(translated) = &response.translated_text {
        println!("{translated}");
    } else if let Some(error) = &response.error {
        eprintln!("error: {error}");
    }

    Ok(ExitCode::from(exit_status(&response)))
}

/// Runs the `serve` subcommand.
async fn serve(service: &TranslationService) -> anyhow::Result<ExitCode> {
    info!("braille bridge serving JSON lines on stdin");

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    // Ctrl+C clears the flag; the request loop checks it between lines.
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C; shutting down");
                running_clone.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    let stats = run_stdio(service, running).await?;
    info!(requests = stats.requests, "braille bridge stopped");
    Ok(ExitCode::SUCCESS)
}

fn render_json(response: &TranslationResponse, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    };
    rendered.context("failed to encode response")
}

/// `0` on success, `1` on any translation failure.
fn exit_status(response: &TranslationResponse) -> u8 {
    u8::from(!response.success)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
