//! Output encoding for the daily table and run summary reporting.
//!
//! Supports pretty-printing and JSON logging of the summary, and CSV encoding
//! of the daily table.

use anyhow::Result;
use csv::WriterBuilder;
use tracing::{debug, info};

use crate::columns::{self, LAG_DAYS};
use crate::daily::types::{DailyRow, DailyTable};
use crate::error::PrepError;
use crate::stats::RunSummary;

/// Logs the run summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &RunSummary) {
    debug!("{:#?}", summary);
}

/// Logs the run summary as pretty-printed JSON.
pub fn print_json(summary: &RunSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Column headers of the daily table, in output order.
pub fn header(table: &DailyTable) -> Vec<String> {
    let mut header = vec![columns::DATE.to_string()];
    header.extend(table.schema.numeric.iter().map(|f| f.header().to_string()));
    header.extend(table.schema.categorical.iter().map(|f| f.header().to_string()));
    if table.has_features {
        header.extend((1..=LAG_DAYS).map(columns::lag_header));
        header.push(columns::ROLLING_MEAN.to_string());
        header.push(columns::ROLLING_STD.to_string());
    }
    header
}

/// Encodes the daily table as CSV with a header row.
///
/// Dates are written as `YYYY-MM-DD`; missing cells are left empty.
pub fn write_daily(table: &DailyTable) -> Result<Vec<u8>, PrepError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record(header(table))
        .map_err(PrepError::OutputEncode)?;
    for row in &table.rows {
        writer
            .write_record(encode_row(table, row))
            .map_err(PrepError::OutputEncode)?;
    }

    writer
        .into_inner()
        .map_err(|e| PrepError::OutputEncode(e.into_error().into()))
}

fn encode_row(table: &DailyTable, row: &DailyRow) -> Vec<String> {
    let mut record = vec![row.date.format("%Y-%m-%d").to_string()];
    record.extend(
        table
            .schema
            .numeric
            .iter()
            .map(|f| row.numeric[f.index()].map(format_float).unwrap_or_default()),
    );
    record.extend(
        table
            .schema
            .categorical
            .iter()
            .map(|f| row.categorical[f.index()].clone().unwrap_or_default()),
    );
    if table.has_features {
        match &row.features {
            Some(features) => {
                record.extend(features.lags.iter().copied().map(format_float));
                record.push(format_float(features.rolling_mean));
                record.push(format_float(features.rolling_std));
            }
            None => record.extend(std::iter::repeat_n(String::new(), LAG_DAYS + 2)),
        }
    }
    record
}

/// Shortest round-trip form, always with a fractional part (`4.0`, `9.47`).
///
/// Very large or small magnitudes use a signed exponent of at least two digits
/// (`1e+16`, `1.5e-07`).
fn format_float(v: f64) -> String {
    let s = format!("{v:?}");
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            Err(_) => s,
        },
        None => s,
    }
}
