use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::daily::types::DailyTable;
use crate::output::header;

#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub input_path: Option<String>,
    pub output_path: Option<String>,

    // row accounting
    pub input_rows: usize,
    pub unparseable_timestamps: usize,
    pub days: usize,
    pub trimmed_rows: usize,
    pub output_rows: usize,

    pub columns: Vec<String>,
}

impl RunSummary {
    pub fn from_table(table: &DailyTable) -> Self {
        RunSummary {
            timestamp: Utc::now(),
            input_rows: table.stats.input_rows,
            unparseable_timestamps: table.stats.unparseable_timestamps,
            days: table.stats.days,
            trimmed_rows: table.stats.trimmed_rows,
            output_rows: table.rows.len(),
            columns: header(table),
            ..Default::default()
        }
    }

    /// Share of input rows whose timestamp could not be parsed, in percent.
    pub fn unparseable_pct(&self) -> f64 {
        if self.input_rows == 0 {
            0.0
        } else {
            (self.unparseable_timestamps as f64 / self.input_rows as f64) * 100.0
        }
    }

    /// Set the input and output locations
    pub fn with_paths(mut self, input: &str, output: &str) -> Self {
        self.input_path = Some(input.to_string());
        self.output_path = Some(output.to_string());
        self
    }
}
