//! The batch job: hourly CSV in, daily feature CSV out.

use std::path::Path;

use tracing::{info, warn};

use crate::daily::aggregate_daily;
use crate::error::PrepError;
use crate::output::write_daily;
use crate::parser::read_hourly;
use crate::stats::RunSummary;
use crate::storage::Storage;

/// Reads the hourly table at `input`, aggregates it and writes the daily
/// feature table to `output`.
///
/// The output's parent directory is created when missing and an existing file
/// is replaced. Nothing is written at `output` unless the whole run succeeds.
///
/// # Errors
///
/// Returns a [`PrepError`] for unreadable or malformed input, a missing
/// timestamp column, or a failure to create or write the output.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn run<S: Storage>(storage: &S, input: &Path, output: &Path) -> Result<RunSummary, PrepError> {
    storage.ensure_parent_dir(output)?;

    info!("Reading input file: {}", input.display());
    let bytes = storage.read(input)?;
    let hourly = read_hourly(bytes.as_slice())?;

    info!(rows = hourly.rows.len(), "Starting preprocessing ...");
    let daily = aggregate_daily(hourly);
    if daily.rows.is_empty() {
        warn!(
            days = daily.stats.days,
            "No daily rows left after trimming; writing header only"
        );
    }

    let encoded = write_daily(&daily)?;
    storage.write(output, &encoded)?;

    let summary = RunSummary::from_table(&daily)
        .with_paths(&input.display().to_string(), &output.display().to_string());
    if summary.unparseable_timestamps > 0 {
        warn!(
            dropped = summary.unparseable_timestamps,
            pct = summary.unparseable_pct(),
            "Dropped rows with unparseable timestamps"
        );
    }
    info!(
        rows = summary.output_rows,
        "Preprocessing finished. Output saved to: {}",
        output.display()
    );

    Ok(summary)
}
