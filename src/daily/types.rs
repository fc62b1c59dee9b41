//! Data types flowing through the daily aggregation pipeline.

use crate::columns::{CATEGORICAL_COUNT, LAG_DAYS, NUMERIC_COUNT, Schema};
use chrono::NaiveDate;
use serde::Serialize;

/// A single row of the hourly input table.
///
/// The timestamp is kept raw; it is normalized during aggregation, where rows
/// that fail to parse are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawObservation {
    pub timestamp: String,
    pub numeric: [Option<f64>; NUMERIC_COUNT],
    pub categorical: [Option<String>; CATEGORICAL_COUNT],
}

/// The hourly input table: present columns plus rows in file order.
#[derive(Debug, Clone, Default)]
pub struct HourlyTable {
    pub schema: Schema,
    pub rows: Vec<RawObservation>,
}

/// Temperature history attached to a daily row.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureFeatures {
    /// `lags[k - 1]` is the temperature `k` rows earlier.
    pub lags: [f64; LAG_DAYS],
    pub rolling_mean: f64,
    pub rolling_std: f64,
}

/// One calendar date of aggregated observations.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub numeric: [Option<f64>; NUMERIC_COUNT],
    pub categorical: [Option<String>; CATEGORICAL_COUNT],
    pub features: Option<TemperatureFeatures>,
}

impl DailyRow {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            numeric: [None; NUMERIC_COUNT],
            categorical: Default::default(),
            features: None,
        }
    }
}

/// Counters describing one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub input_rows: usize,
    pub unparseable_timestamps: usize,
    pub days: usize,
    pub trimmed_rows: usize,
}

/// The daily output table, ascending by date.
#[derive(Debug, Clone, Default)]
pub struct DailyTable {
    pub schema: Schema,
    /// Whether rows carry lag and rolling temperature features.
    pub has_features: bool,
    pub rows: Vec<DailyRow>,
    pub stats: AggregateStats,
}
