//! CSV reader for the hourly observation table.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::columns::{self, CategoricalField, NumericField, Schema};
use crate::daily::types::{HourlyTable, RawObservation};
use crate::error::PrepError;

/// Cell values read as missing, after trimming surrounding whitespace.
const MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "#N/A", "NaN", "nan", "-NaN", "null", "NULL", "None",
];

/// Decodes a comma-separated hourly table with a header row.
///
/// Recognized headers are matched by exact text; anything else is ignored.
/// Rows shorter than the header are padded with missing values.
///
/// # Errors
///
/// Returns [`PrepError::MissingColumn`] when the timestamp column is absent,
/// [`PrepError::ExtraFields`] when a row is longer than the header and
/// [`PrepError::InputCsv`] when the delimited structure is malformed.
pub fn read_hourly<R: Read>(reader: R) -> Result<HourlyTable, PrepError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);

    let timestamp_idx =
        position(columns::TIMESTAMP).ok_or(PrepError::MissingColumn(columns::TIMESTAMP))?;

    for &excluded in columns::EXCLUDED {
        if position(excluded).is_some() {
            debug!(column = excluded, "Ignoring excluded column");
        }
    }

    let numeric: Vec<(NumericField, usize)> = NumericField::ALL
        .iter()
        .filter_map(|&field| position(field.header()).map(|idx| (field, idx)))
        .collect();
    let categorical: Vec<(CategoricalField, usize)> = CategoricalField::ALL
        .iter()
        .filter_map(|&field| position(field.header()).map(|idx| (field, idx)))
        .collect();

    let schema = Schema {
        numeric: numeric.iter().map(|(field, _)| *field).collect(),
        categorical: categorical.iter().map(|(field, _)| *field).collect(),
    };
    debug!(?schema, "Resolved input columns");

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.len() > headers.len() {
            return Err(PrepError::ExtraFields {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(decode_row(&record, timestamp_idx, &numeric, &categorical));
    }

    Ok(HourlyTable { schema, rows })
}

fn decode_row(
    record: &StringRecord,
    timestamp_idx: usize,
    numeric: &[(NumericField, usize)],
    categorical: &[(CategoricalField, usize)],
) -> RawObservation {
    let mut row = RawObservation {
        timestamp: record.get(timestamp_idx).unwrap_or_default().to_string(),
        ..Default::default()
    };

    for &(field, idx) in numeric {
        row.numeric[field.index()] = record.get(idx).and_then(|cell| parse_number(field, cell));
    }

    for &(field, idx) in categorical {
        row.categorical[field.index()] = record.get(idx).and_then(parse_label);
    }

    row
}

fn is_missing(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell)
}

fn parse_number(field: NumericField, cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if is_missing(cell) {
        return None;
    }
    match cell.parse::<f64>() {
        Ok(v) if !v.is_nan() => Some(v),
        _ => {
            debug!(
                column = field.header(),
                value = cell,
                "Unparseable measurement treated as missing"
            );
            None
        }
    }
}

fn parse_label(cell: &str) -> Option<String> {
    let cell = cell.trim();
    if is_missing(cell) {
        None
    } else {
        Some(cell.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Formatted Date,Summary,Precip Type,Temperature (C),Apparent Temperature (C),Humidity,Wind Speed (km/h),Wind Bearing (degrees),Visibility (km),Loud Cover,Pressure (millibars),Daily Summary";

    #[test]
    fn test_full_schema_in_fixed_order() {
        let csv = format!(
            "{HEADER}\n2006-04-01 00:00:00.000 +0200,Partly Cloudy,rain,9.47,7.38,0.89,14.11,251,15.82,0,1015.13,Partly cloudy throughout the day.\n"
        );
        let table = read_hourly(csv.as_bytes()).unwrap();

        assert_eq!(table.schema, Schema::full());
        assert_eq!(table.rows.len(), 1);

        let row = &table.rows[0];
        assert_eq!(row.timestamp, "2006-04-01 00:00:00.000 +0200");
        assert_eq!(row.numeric[NumericField::Temperature.index()], Some(9.47));
        assert_eq!(row.numeric[NumericField::Pressure.index()], Some(1015.13));
        assert_eq!(
            row.categorical[CategoricalField::PrecipType.index()].as_deref(),
            Some("rain")
        );
        assert_eq!(
            row.categorical[CategoricalField::Summary.index()].as_deref(),
            Some("Partly Cloudy")
        );
    }

    #[test]
    fn test_missing_timestamp_column_is_fatal() {
        let csv = "Temperature (C),Humidity\n1.0,0.5\n";
        let err = read_hourly(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PrepError::MissingColumn("Formatted Date")));
    }

    #[test]
    fn test_empty_input_is_missing_timestamp() {
        let err = read_hourly("".as_bytes()).unwrap_err();
        assert!(matches!(err, PrepError::MissingColumn(_)));
    }

    #[test]
    fn test_unrecognized_and_absent_columns() {
        let csv = "Station,Formatted Date,Humidity\nX,2020-01-01,0.5\n";
        let table = read_hourly(csv.as_bytes()).unwrap();

        assert_eq!(table.schema.numeric, vec![NumericField::Humidity]);
        assert!(table.schema.categorical.is_empty());
        assert!(!table.schema.has_temperature());
        assert_eq!(table.rows[0].numeric[NumericField::Humidity.index()], Some(0.5));
    }

    #[test]
    fn test_missing_and_bad_cells() {
        let csv = "Formatted Date,Temperature (C),Precip Type\n\
                   2020-01-01,,null\n\
                   2020-01-02,abc,\n\
                   2020-01-03, 4.5 ,snow\n";
        let table = read_hourly(csv.as_bytes()).unwrap();
        let temp = NumericField::Temperature.index();
        let precip = CategoricalField::PrecipType.index();

        assert_eq!(table.rows[0].numeric[temp], None);
        assert_eq!(table.rows[0].categorical[precip], None);
        assert_eq!(table.rows[1].numeric[temp], None);
        assert_eq!(table.rows[1].categorical[precip], None);
        assert_eq!(table.rows[2].numeric[temp], Some(4.5));
        assert_eq!(table.rows[2].categorical[precip].as_deref(), Some("snow"));
    }

    #[test]
    fn test_long_row_is_fatal() {
        let csv = "Formatted Date,Temperature (C)\n2020-01-01,1.0\n2020-01-02,2.0,extra\n";
        let err = read_hourly(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PrepError::ExtraFields {
                line: 3,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_short_row_is_padded_with_missing() {
        let csv = "Formatted Date,Temperature (C),Humidity,Summary\n\
                   2020-01-01,1.0\n\
                   2020-01-02\n";
        let table = read_hourly(csv.as_bytes()).unwrap();
        let temp = NumericField::Temperature.index();
        let humidity = NumericField::Humidity.index();
        let summary = CategoricalField::Summary.index();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].numeric[temp], Some(1.0));
        assert_eq!(table.rows[0].numeric[humidity], None);
        assert_eq!(table.rows[0].categorical[summary], None);
        assert_eq!(table.rows[1].timestamp, "2020-01-02");
        assert_eq!(table.rows[1].numeric[temp], None);
    }

    #[test]
    fn test_short_row_without_timestamp_cell() {
        let csv = "Temperature (C),Formatted Date\n1.0\n";
        let table = read_hourly(csv.as_bytes()).unwrap();
        assert_eq!(table.rows[0].timestamp, "");
        assert_eq!(table.rows[0].numeric[NumericField::Temperature.index()], Some(1.0));
    }
}
