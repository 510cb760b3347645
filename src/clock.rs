//! Time source abstraction.
//!
//! Reports that carry a timestamp read it from a [`Clock`] so tests and
//! replayed runs can pin the time.

use std::fmt::Debug;

use chrono::{Local, NaiveDateTime, ParseResult};

/// Format accepted by [`FixedClock::parse`].
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local time.
pub trait Clock: Debug {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Parse a `YYYY-MM-DD HH:MM:SS` string.
    pub fn parse(s: &str) -> ParseResult<Self> {
        NaiveDateTime::parse_from_str(s.trim(), CLOCK_FORMAT).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_parse() {
        let clock = FixedClock::parse("2026-01-07 22:00:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2026, 1, 7)
            .and_then(|d| d.and_hms_opt(22, 0, 0))
            .unwrap();
        assert_eq!(clock.now(), expected);
    }

    #[test]
    fn test_fixed_clock_rejects_garbage() {
        assert!(FixedClock::parse("yesterday").is_err());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
