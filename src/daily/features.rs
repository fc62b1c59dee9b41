//! Lag and rolling temperature features.

use crate::columns::{LAG_DAYS, ROLLING_WINDOW};
use crate::daily::types::TemperatureFeatures;
use crate::daily::utility::{mean, sample_stddev};

/// Computes lag and rolling features for each position of a date-ordered
/// temperature series.
///
/// Offsets are positional: lag `k` is the value `k` rows earlier. A position
/// gets `None` when any lag or any value of its trailing window is unavailable.
pub fn temperature_features(temps: &[Option<f64>]) -> Vec<Option<TemperatureFeatures>> {
    (0..temps.len()).map(|i| features_at(temps, i)).collect()
}

fn features_at(temps: &[Option<f64>], i: usize) -> Option<TemperatureFeatures> {
    let mut lags = [0.0; LAG_DAYS];
    for (k, lag) in (1..=LAG_DAYS).zip(lags.iter_mut()) {
        *lag = temps[i.checked_sub(k)?]?;
    }

    let start = (i + 1).checked_sub(ROLLING_WINDOW)?;
    let window = temps[start..=i].iter().copied().collect::<Option<Vec<f64>>>()?;
    let rolling_mean = mean(&window)?;
    let rolling_std = sample_stddev(&window, rolling_mean)?;

    Some(TemperatureFeatures {
        lags,
        rolling_mean,
        rolling_std,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_first_seven_positions_are_undefined() {
        let temps = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let features = temperature_features(&temps);

        assert_eq!(features.len(), 10);
        assert!(features[..7].iter().all(Option::is_none));
        assert!(features[7..].iter().all(Option::is_some));
    }

    #[test]
    fn test_lags_and_window() {
        let temps = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let f = temperature_features(&temps)[7].clone().unwrap();

        assert_eq!(f.lags, [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        // window is days 2..=8
        assert!((f.rolling_mean - 5.0).abs() < 1e-12);
        assert!((f.rolling_std - (28.0f64 / 6.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_missing_value_in_window_is_undefined() {
        let mut temps = series(&[1.0; 9]);
        temps[4] = None;
        let features = temperature_features(&temps);

        assert!(features[7].is_none());
        assert!(features[8].is_none());
    }

    #[test]
    fn test_short_series() {
        let temps = series(&[1.0, 2.0, 3.0]);
        assert!(temperature_features(&temps).iter().all(Option::is_none));
        assert!(temperature_features(&[]).is_empty());
    }
}
