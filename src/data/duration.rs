use std::time::Duration;

use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer};

/// Suffix to nanoseconds multiplier (order matters: `ms` before `m`, `ns` before `s`)
const UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("µs", 1_000.0),
    ("us", 1_000.0),
    ("ms", 1_000_000.0),
    ("s", 1_000_000_000.0),
    ("m", 60_000_000_000.0),
    ("h", 3_600_000_000_000.0),
];

/// Parse duration strings like "2s", "1.5s", "500ms", "16.958µs", "5m", "1h"
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();

    for (suffix, multiplier) in UNITS {
        if let Some(val_str) = s.strip_suffix(suffix) {
            let val: f64 = val_str.trim().parse()?;
            if !val.is_finite() || val < 0.0 {
                bail!("Duration must be a non-negative number: {}", s);
            }
            return Ok(Duration::from_nanos((val * multiplier) as u64));
        }
    }

    bail!("Unknown duration format: {}", s)
}

/// Format a fractional hour count the way backup estimates are printed
pub fn format_hours(hours: f64) -> String {
    format!("{:.1} hours", hours)
}

/// Deserialize a duration from either a string ("2s") or a number of seconds.
///
/// A bare numeric string ("3") is read as seconds, since environment
/// variables always arrive as text.
pub fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Seconds(f64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Text(s) => match s.trim().parse::<f64>() {
            Ok(secs) => Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom),
            Err(_) => parse_duration(&s).map_err(serde::de::Error::custom),
        },
        Raw::Seconds(secs) => Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        let d = parse_duration("2s").unwrap();
        assert_eq!(d, Duration::from_secs(2));
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let d = parse_duration("1.5s").unwrap();
        assert!((d.as_secs_f64() - 1.5).abs() < 0.0001);
    }

    #[test]
    fn test_parse_milliseconds() {
        let d = parse_duration("500ms").unwrap();
        assert_eq!(d, Duration::from_millis(500));
    }

    #[test]
    fn test_parse_microseconds() {
        let d = parse_duration("16.958µs").unwrap();
        assert_eq!(d.as_nanos(), 16958);
    }

    #[test]
    fn test_parse_minutes_and_hours() {
        assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_rejects_unknown_and_negative() {
        assert!(parse_duration("2 parsecs").is_err());
        assert!(parse_duration("-1s").is_err());
        assert!(parse_duration("12").is_err());
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(5.0), "5.0 hours");
        assert_eq!(format_hours(12.04), "12.0 hours");
    }

    #[test]
    fn test_deserialize_string_or_number() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(deserialize_with = "deserialize_duration")]
            limit: Duration,
        }

        let text: Holder = serde_json::from_str(r#"{ "limit": "750ms" }"#).unwrap();
        assert_eq!(text.limit, Duration::from_millis(750));

        let number: Holder = serde_json::from_str(r#"{ "limit": 2.5 }"#).unwrap();
        assert_eq!(number.limit, Duration::from_millis(2500));

        let bare: Holder = serde_json::from_str(r#"{ "limit": "3" }"#).unwrap();
        assert_eq!(bare.limit, Duration::from_secs(3));

        assert!(serde_json::from_str::<Holder>(r#"{ "limit": "-3" }"#).is_err());
    }
}
