//! CLI entry point for the capacity summary tool.
//!
//! Reads the raw per-year power-plant dataset and writes the processed
//! summary consumed by the map website.

use anyhow::{Context, Result};
use capacity_summary::analyzers::analyzer::analyze;
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "capacity_summary")]
#[command(about = "Summarize power-plant capacity by country, fuel and year", long_about = None)]
struct Cli {
    /// Raw dataset: JSON mapping year -> plant records, or CSV with a year column
    #[arg(short, long, env = "CAPACITY_INPUT", default_value = "raw_data.json")]
    input: PathBuf,

    /// Where to write the processed summary JSON
    #[arg(
        short,
        long,
        env = "CAPACITY_OUTPUT",
        default_value = "website/data/processed_data.json"
    )]
    output: PathBuf,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();

    let _file_guard = init_tracing()?;

    match analyze(&cli.input, &cli.output) {
        Ok(_) => {
            info!(output = %cli.output.display(), "Successfully processed data");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "Processing failed, no output written");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// The returned guard must be held until exit so buffered file logs are flushed.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/capacity_summary.log".to_string());

    let file_appender = log_appender(Path::new(&log_file_path))?;
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(file_guard)
}

/// Daily-rolling appender for `log_file_path`.
///
/// Fails instead of panicking when the log directory cannot be created or
/// the file cannot be opened.
fn log_appender(log_file_path: &Path) -> Result<RollingFileAppender> {
    let log_dir = log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("capacity_summary.log"));

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(log_file_name.to_string_lossy())
        .build(log_dir)
        .with_context(|| format!("cannot open log file in '{}'", log_dir.display()))
}
