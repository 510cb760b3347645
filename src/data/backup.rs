//! Backup time projection.
//!
//! Each database transfers at `size / speed` hours; the sum is added to the
//! current time to project when the whole run finishes.

use chrono::TimeDelta;
use sre_drills_types::{BackupPlan, DatabaseEstimate};
use tracing::debug;

use crate::clock::Clock;
use crate::error::{DrillError, Result};

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Estimate transfer hours per database and the projected completion time.
///
/// `databases` yields `(name, size_gb)` pairs; `network_speed_gbph` is the
/// link speed in GB per hour.
pub fn calculate_backup_time<I, K>(
    databases: I,
    network_speed_gbph: f64,
    clock: &dyn Clock,
) -> Result<BackupPlan>
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    if !network_speed_gbph.is_finite() || network_speed_gbph <= 0.0 {
        return Err(DrillError::InvalidSpeed(network_speed_gbph));
    }

    let started = clock.now();
    let mut estimates = Vec::new();
    let mut total_hours = 0.0;

    for (name, size_gb) in databases {
        let name = name.into();
        if !size_gb.is_finite() || size_gb < 0.0 {
            return Err(DrillError::InvalidSize {
                name,
                size: size_gb,
            });
        }
        let hours = size_gb / network_speed_gbph;
        debug!(database = %name, size_gb, hours, "estimated backup time");
        total_hours += hours;
        estimates.push(DatabaseEstimate {
            name,
            size_gb,
            hours,
        });
    }

    let estimated_completion = hours_after(started, total_hours)?;

    Ok(BackupPlan {
        databases: estimates,
        total_hours,
        network_speed_gbph,
        estimated_completion,
    })
}

fn hours_after(start: chrono::NaiveDateTime, hours: f64) -> Result<chrono::NaiveDateTime> {
    let micros = (hours * MICROS_PER_HOUR).round();
    if !micros.is_finite() || micros > i64::MAX as f64 {
        return Err(DrillError::TimeOverflow { hours });
    }
    start
        .checked_add_signed(TimeDelta::microseconds(micros as i64))
        .ok_or(DrillError::TimeOverflow { hours })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::parse("2026-01-08 08:00:00").unwrap()
    }

    #[test]
    fn test_single_database() {
        let plan = calculate_backup_time([("x", 50.0)], 10.0, &clock()).unwrap();

        assert_eq!(plan.hours_for("x"), Some(5.0));
        assert_eq!(plan.total_hours, 5.0);
        assert_eq!(plan.completion_display(), "2026-01-08 13:00:00");
    }

    #[test]
    fn test_sample_databases_keep_order() {
        let databases = [("users_db", 50.0), ("orders_db", 120.0), ("logs_db", 200.0)];
        let plan = calculate_backup_time(databases, 10.0, &clock()).unwrap();

        let names: Vec<&str> = plan.databases.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["users_db", "orders_db", "logs_db"]);
        assert_eq!(plan.hours_for("orders_db"), Some(12.0));
        assert_eq!(plan.hours_for("logs_db"), Some(20.0));
        assert_eq!(plan.total_hours, 37.0);
        assert_eq!(plan.completion_display(), "2026-01-09 21:00:00");
    }

    #[test]
    fn test_fractional_hours() {
        let plan = calculate_backup_time([("small", 5.0)], 4.0, &clock()).unwrap();
        assert_eq!(plan.total_hours, 1.25);
        assert_eq!(plan.completion_display(), "2026-01-08 09:15:00");
    }

    #[test]
    fn test_no_databases_completes_now() {
        let plan = calculate_backup_time(Vec::<(String, f64)>::new(), 10.0, &clock()).unwrap();
        assert_eq!(plan.total_hours, 0.0);
        assert_eq!(plan.estimated_completion, clock().0);
    }

    #[test]
    fn test_zero_speed_is_error() {
        let err = calculate_backup_time([("x", 50.0)], 0.0, &clock()).unwrap_err();
        assert!(matches!(err, DrillError::InvalidSpeed(s) if s == 0.0));

        let err = calculate_backup_time([("x", 50.0)], f64::NAN, &clock()).unwrap_err();
        assert!(matches!(err, DrillError::InvalidSpeed(_)));
    }

    #[test]
    fn test_negative_size_is_error() {
        let err = calculate_backup_time([("x", -1.0)], 10.0, &clock()).unwrap_err();
        assert!(matches!(err, DrillError::InvalidSize { name, .. } if name == "x"));
    }

    #[test]
    fn test_overflowing_completion_is_error() {
        let err = calculate_backup_time([("huge", 1e300)], 1e-300, &clock()).unwrap_err();
        assert!(matches!(err, DrillError::TimeOverflow { .. }));
    }
}
