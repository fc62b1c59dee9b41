//! CLI entry point for the daily weather preprocessing job.
//!
//! Reads an hourly observation CSV, aggregates it into daily rows with lag and
//! rolling temperature features, and writes the result as CSV.

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use weather_daily_prep::{
    job,
    output::{print_json, print_pretty},
    storage::LocalStorage,
};

#[derive(Parser)]
#[command(name = "weather_daily_prep")]
#[command(
    about = "Aggregate hourly weather observations into daily forecasting features",
    long_about = None
)]
struct Cli {
    /// Path to the raw hourly CSV
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Path to save the processed daily CSV
    #[arg(long, value_name = "FILE")]
    output: PathBuf,

    /// Log the run summary as JSON
    #[arg(long, default_value_t = false)]
    summary_json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: progress on stdout + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/weather_daily_prep.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("weather_daily_prep.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stdout)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let summary = job::run(&LocalStorage::new(), &cli.input, &cli.output).with_context(|| {
        format!(
            "Preprocessing '{}' into '{}' failed",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    print_pretty(&summary);
    if cli.summary_json {
        print_json(&summary)?;
    }

    Ok(())
}
