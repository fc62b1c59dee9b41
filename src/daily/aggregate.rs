use crate::columns::{CATEGORICAL_COUNT, NUMERIC_COUNT, NumericField, Schema};
use crate::daily::features::temperature_features;
use crate::daily::fill::fill_forward_backward;
use crate::daily::types::{AggregateStats, DailyRow, DailyTable, HourlyTable, RawObservation};
use crate::daily::utility::{mean, mode};
use crate::timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::debug;

/// Values collected for one calendar date.
#[derive(Default)]
struct Bucket<'a> {
    numeric: [Vec<f64>; NUMERIC_COUNT],
    labels: [Vec<&'a str>; CATEGORICAL_COUNT],
}

/// Aggregates an [`HourlyTable`] into a [`DailyTable`].
///
/// Rows with an unparseable timestamp are dropped. The rest are normalized to
/// UTC, sorted, bucketed by calendar date and reduced to daily means and
/// modes. Gaps are forward- then backward-filled. When the input carries
/// temperature, lag and rolling features are attached and the leading rows
/// without complete features are trimmed.
pub fn aggregate_daily(table: HourlyTable) -> DailyTable {
    let HourlyTable { schema, rows } = table;
    let input_rows = rows.len();

    let mut stamped: Vec<(NaiveDateTime, RawObservation)> = rows
        .into_iter()
        .filter_map(|row| match timestamp::normalize(&row.timestamp) {
            Some(ts) => Some((ts, row)),
            None => {
                debug!(timestamp = %row.timestamp, "Dropping row with unparseable timestamp");
                None
            }
        })
        .collect();
    let unparseable_timestamps = input_rows - stamped.len();

    stamped.sort_by_key(|(ts, _)| *ts);

    let mut daily = reduce_buckets(&schema, &stamped);
    fill_missing(&schema, &mut daily);
    let days = daily.len();

    let has_features = schema.has_temperature();
    let mut trimmed_rows = 0;
    if has_features {
        let temps: Vec<Option<f64>> = daily
            .iter()
            .map(|row| row.numeric[NumericField::Temperature.index()])
            .collect();
        for (row, features) in daily.iter_mut().zip(temperature_features(&temps)) {
            row.features = features;
        }
        daily.retain(|row| row.features.is_some());
        trimmed_rows = days - daily.len();
    }

    DailyTable {
        schema,
        has_features,
        rows: daily,
        stats: AggregateStats {
            input_rows,
            unparseable_timestamps,
            days,
            trimmed_rows,
        },
    }
}

fn reduce_buckets(schema: &Schema, stamped: &[(NaiveDateTime, RawObservation)]) -> Vec<DailyRow> {
    let mut buckets: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();

    for (ts, row) in stamped {
        let bucket = buckets.entry(ts.date()).or_default();
        for field in &schema.numeric {
            if let Some(v) = row.numeric[field.index()] {
                bucket.numeric[field.index()].push(v);
            }
        }
        for field in &schema.categorical {
            if let Some(label) = &row.categorical[field.index()] {
                bucket.labels[field.index()].push(label.as_str());
            }
        }
    }

    buckets
        .into_iter()
        .map(|(date, bucket)| {
            let mut day = DailyRow::new(date);
            for field in &schema.numeric {
                day.numeric[field.index()] = mean(&bucket.numeric[field.index()]);
            }
            for field in &schema.categorical {
                let labels = bucket.labels[field.index()].iter().copied();
                day.categorical[field.index()] = mode(labels).map(str::to_string);
            }
            day
        })
        .collect()
}

fn fill_missing(schema: &Schema, daily: &mut [DailyRow]) {
    for field in &schema.numeric {
        let mut cells: Vec<&mut Option<f64>> = daily
            .iter_mut()
            .map(|row| &mut row.numeric[field.index()])
            .collect();
        fill_forward_backward(&mut cells);
    }
    for field in &schema.categorical {
        let mut cells: Vec<&mut Option<String>> = daily
            .iter_mut()
            .map(|row| &mut row.categorical[field.index()])
            .collect();
        fill_forward_backward(&mut cells);
    }
}
