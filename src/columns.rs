//! Fixed column set of the hourly observation table.
//!
//! Headers are matched by exact text. Output columns follow the declaration
//! order of [`NumericField::ALL`] and [`CategoricalField::ALL`].

/// Header of the observation timestamp column.
pub const TIMESTAMP: &str = "Formatted Date";

/// Header of the date column in the daily table.
pub const DATE: &str = "Date";

/// Headers present in the source data but excluded from all processing.
pub const EXCLUDED: &[&str] = &["Loud Cover", "Daily Summary"];

/// Number of temperature lag columns.
pub const LAG_DAYS: usize = 7;

/// Length of the trailing rolling window, in rows.
pub const ROLLING_WINDOW: usize = 7;

pub const ROLLING_MEAN: &str = "temp_roll7_mean";
pub const ROLLING_STD: &str = "temp_roll7_std";

pub const NUMERIC_COUNT: usize = 7;
pub const CATEGORICAL_COUNT: usize = 2;

/// Numeric measurements averaged per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Temperature,
    ApparentTemperature,
    Humidity,
    WindSpeed,
    WindBearing,
    Visibility,
    Pressure,
}

impl NumericField {
    pub const ALL: [NumericField; NUMERIC_COUNT] = [
        NumericField::Temperature,
        NumericField::ApparentTemperature,
        NumericField::Humidity,
        NumericField::WindSpeed,
        NumericField::WindBearing,
        NumericField::Visibility,
        NumericField::Pressure,
    ];

    pub fn header(self) -> &'static str {
        match self {
            NumericField::Temperature => "Temperature (C)",
            NumericField::ApparentTemperature => "Apparent Temperature (C)",
            NumericField::Humidity => "Humidity",
            NumericField::WindSpeed => "Wind Speed (km/h)",
            NumericField::WindBearing => "Wind Bearing (degrees)",
            NumericField::Visibility => "Visibility (km)",
            NumericField::Pressure => "Pressure (millibars)",
        }
    }

    /// Position of this field in per-row value arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Categorical labels reduced to their daily mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    PrecipType,
    Summary,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; CATEGORICAL_COUNT] =
        [CategoricalField::PrecipType, CategoricalField::Summary];

    pub fn header(self) -> &'static str {
        match self {
            CategoricalField::PrecipType => "Precip Type",
            CategoricalField::Summary => "Summary",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Header of the `lag`-day temperature lag column, e.g. `Temperature (C)_lag_3`.
pub fn lag_header(lag: usize) -> String {
    format!("{}_lag_{}", NumericField::Temperature.header(), lag)
}

/// Which recognized columns the input carried.
///
/// Fields are kept in their fixed declaration order regardless of the order
/// in which they appeared in the input header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub numeric: Vec<NumericField>,
    pub categorical: Vec<CategoricalField>,
}

impl Schema {
    /// Schema with every recognized column present.
    pub fn full() -> Self {
        Self {
            numeric: NumericField::ALL.to_vec(),
            categorical: CategoricalField::ALL.to_vec(),
        }
    }

    pub fn has_temperature(&self) -> bool {
        self.numeric.contains(&NumericField::Temperature)
    }
}
