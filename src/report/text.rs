//! Console rendering for the reports.

use std::fmt;

use sre_drills_types::{BackupPlan, Band, DiskReport, DrillReport, HealthReport, LogReport};

use crate::data::duration::format_hours;
use crate::data::generate_report;

const RULE: &str = "----------------------------------------";

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", RULE)
}

fn join(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

/// Disk bands with their members and counts.
pub struct DiskView<'a>(pub &'a DiskReport);

impl fmt::Display for DiskView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        heading(f, "Disk Space Monitor")?;
        let worst = report.worst();
        writeln!(f, "Overall: [{}] {}", worst.symbol(), worst.label())?;
        for band in [Band::Healthy, Band::Warning, Band::Critical] {
            writeln!(
                f,
                "[{:<4}] {:<8} {}",
                band.symbol(),
                band.label(),
                join(report.members(band))
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Warning count: {}", report.warning_count)?;
        writeln!(f, "Critical count: {}", report.critical_count)?;
        writeln!(f, "Healthy count: {}", report.healthy_count)
    }
}

/// Per-database hours, total and projected completion.
pub struct BackupView<'a>(pub &'a BackupPlan);

impl fmt::Display for BackupView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        heading(f, "Backup Time Calculator")?;
        writeln!(f, "Backup times per database:")?;
        for db in &plan.databases {
            writeln!(f, "  {}: {}", db.name, format_hours(db.hours))?;
        }
        writeln!(f)?;
        writeln!(f, "Total backup time: {}", format_hours(plan.total_hours))?;
        writeln!(f, "Estimated completion: {}", plan.completion_display())
    }
}

/// Level counts, top error messages and error rate.
pub struct LogView<'a>(pub &'a LogReport);

impl fmt::Display for LogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        heading(f, "Log Analysis Report")?;
        writeln!(f, "Log Level Counts:")?;
        for level in &report.counts {
            writeln!(f, "  {}: {}", level.level, level.count)?;
        }
        writeln!(f)?;
        writeln!(f, "Top {} Error Messages:", report.top_errors.len())?;
        for error in &report.top_errors {
            writeln!(f, "  [{}x] {}", error.count, error.message)?;
        }
        writeln!(f)?;
        if report.skipped_lines > 0 {
            writeln!(f, "Skipped malformed lines: {}", report.skipped_lines)?;
        }
        writeln!(f, "Error Rate: {:.1}%", report.error_rate)
    }
}

/// JSON health report followed by a summary and the list of services down.
pub struct HealthView<'a>(pub &'a HealthReport);

impl fmt::Display for HealthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        heading(f, "Health Check Report")?;
        let json = generate_report(report).map_err(|_| fmt::Error)?;
        writeln!(f, "{}", json)?;
        writeln!(f)?;
        writeln!(f, "SUMMARY:")?;
        writeln!(f, "  Healthy: {}", report.healthy_count)?;
        writeln!(f, "  Unhealthy: {}", report.unhealthy_count)?;

        writeln!(f)?;
        if report.is_all_healthy() {
            return writeln!(f, "All services are healthy.");
        }
        writeln!(f, "ALERT: These services are DOWN:")?;
        for name in report.unhealthy_services() {
            writeln!(f, "  - {}", name)?;
        }
        Ok(())
    }
}

/// Every section present in a drill report, separated by blank lines.
pub struct ReportView<'a>(pub &'a DrillReport);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let mut sections: Vec<String> = Vec::new();
        if let Some(disk) = &report.disk {
            sections.push(DiskView(disk).to_string());
        }
        if let Some(backup) = &report.backup {
            sections.push(BackupView(backup).to_string());
        }
        if let Some(logs) = &report.logs {
            sections.push(LogView(logs).to_string());
        }
        if let Some(health) = &report.health {
            sections.push(HealthView(health).to_string());
        }

        if sections.is_empty() {
            return writeln!(f, "Nothing to report: the inventory is empty.");
        }
        write!(f, "{}", sections.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::data::{
        analyze_logs, calculate_backup_time, monitor_disk_usage, run_health_check, DiskThresholds,
        HealthPolicy, LogOptions,
    };
    use sre_drills_types::ServiceResponse;

    fn clock() -> FixedClock {
        FixedClock::parse("2026-01-07 22:51:52").unwrap()
    }

    #[test]
    fn test_disk_view() {
        let report =
            monitor_disk_usage([("db-01", 92.0), ("web-01", 75.0)], &DiskThresholds::default())
                .unwrap();
        let out = DiskView(&report).to_string();

        assert!(out.contains("Overall: [CRIT] critical"));
        assert!(out.contains("[CRIT] critical db-01"));
        assert!(out.contains("[WARN] warning  -"));
        assert!(out.contains("Critical count: 1"));
        assert!(out.contains("Healthy count: 1"));
    }

    #[test]
    fn test_backup_view() {
        let plan = calculate_backup_time([("users_db", 50.0)], 10.0, &clock()).unwrap();
        let out = BackupView(&plan).to_string();

        assert!(out.contains("  users_db: 5.0 hours"));
        assert!(out.contains("Total backup time: 5.0 hours"));
        assert!(out.contains("Estimated completion: 2026-01-08 03:51:52"));
    }

    #[test]
    fn test_log_view() {
        let text = "d t ERROR OutOfMemoryError: Java heap space\nd t INFO ok";
        let report = analyze_logs(text, &LogOptions::default()).unwrap();
        let out = LogView(&report).to_string();

        assert!(out.contains("  ERROR: 1"));
        assert!(out.contains("[1x] OutOfMemoryError: Java heap space"));
        assert!(out.contains("Error Rate: 50.0%"));
        assert!(!out.contains("Skipped"));
    }

    #[test]
    fn test_health_view_lists_down_services() {
        let services = [
            ("api-server", ServiceResponse::new(200, 0.5)),
            ("cache-redis", ServiceResponse::new(500, 5.0)),
        ];
        let report = run_health_check(services, &HealthPolicy::default(), &clock());
        let out = HealthView(&report).to_string();

        assert!(out.contains("\"total_services\": 2"));
        assert!(out.contains("Unhealthy: 1"));
        assert!(out.contains("ALERT: These services are DOWN:\n  - cache-redis"));
    }

    #[test]
    fn test_disk_view_headline_for_quiet_fleet() {
        let report =
            monitor_disk_usage([("web-01", 40.0)], &DiskThresholds::default()).unwrap();
        assert!(DiskView(&report).to_string().contains("Overall: [OK] healthy"));
    }

    #[test]
    fn test_health_view_all_healthy() {
        let services = [("api-server", ServiceResponse::new(200, 0.5))];
        let report = run_health_check(services, &HealthPolicy::default(), &clock());
        let out = HealthView(&report).to_string();

        assert!(out.contains("All services are healthy."));
        assert!(!out.contains("ALERT"));
    }

    #[test]
    fn test_empty_report_view() {
        let report = DrillReport::builder().build();
        assert!(ReportView(&report).to_string().starts_with("Nothing to report"));
    }
}
