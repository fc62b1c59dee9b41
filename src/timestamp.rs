//! Observation timestamp parsing and UTC normalization.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a raw timestamp and normalizes it to a naive UTC instant.
///
/// Offsets are applied and then stripped; timestamps without an offset, or
/// with a trailing `Z`, are taken as UTC. Returns `None` when no accepted
/// layout matches.
pub fn normalize(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_utc());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    // Zulu suffix, with or without a separating space
    if let Some(utc) = s.strip_suffix(['Z', 'z']) {
        return parse_naive(utc.trim_end());
    }

    parse_naive(s)
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_offset_is_converted_to_utc() {
        assert_eq!(
            normalize("2006-04-01 00:00:00.000 +0200"),
            Some(at(2006, 3, 31, 22, 0))
        );
        assert_eq!(
            normalize("2006-10-01 05:00:00.000 +0100"),
            Some(at(2006, 10, 1, 4, 0))
        );
    }

    #[test]
    fn test_mixed_offsets_compare_as_instants() {
        let a = normalize("2006-10-29 02:00:00.000 +0200").unwrap();
        let b = normalize("2006-10-29 01:30:00.000 +0100").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_rfc3339() {
        assert_eq!(
            normalize("2020-01-02T03:04:00+01:00"),
            Some(at(2020, 1, 2, 2, 4))
        );
        assert_eq!(normalize("2020-01-02T03:04:00Z"), Some(at(2020, 1, 2, 3, 4)));
    }

    #[test]
    fn test_t_separator_with_compact_offset() {
        assert_eq!(
            normalize("2006-04-01T00:00:00.000+0200"),
            Some(at(2006, 3, 31, 22, 0))
        );
        assert_eq!(
            normalize("2006-04-01T12:30:00-0130"),
            Some(at(2006, 4, 1, 14, 0))
        );
    }

    #[test]
    fn test_zulu_suffix_is_utc() {
        assert_eq!(
            normalize("2006-04-01 00:00:00.000 Z"),
            Some(at(2006, 4, 1, 0, 0))
        );
        assert_eq!(
            normalize("2006-04-01 00:00:00.000Z"),
            Some(at(2006, 4, 1, 0, 0))
        );
        assert_eq!(
            normalize("2006-04-01T05:06:00.250Z"),
            Some(at(2006, 4, 1, 5, 6) + chrono::Duration::milliseconds(250))
        );
        assert_eq!(normalize("Z"), None);
    }

    #[test]
    fn test_naive_layouts_are_taken_as_utc() {
        assert_eq!(normalize("2020-01-02 03:04:00"), Some(at(2020, 1, 2, 3, 4)));
        assert_eq!(
            normalize("2020-01-02T03:04:00.5"),
            Some(at(2020, 1, 2, 3, 4) + chrono::Duration::milliseconds(500))
        );
        assert_eq!(normalize("2020-01-02 03:04"), Some(at(2020, 1, 2, 3, 4)));
        assert_eq!(normalize(" 2020-01-02 "), Some(at(2020, 1, 2, 0, 0)));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("not a date"), None);
        assert_eq!(normalize("2020-13-40 00:00:00"), None);
    }
}
