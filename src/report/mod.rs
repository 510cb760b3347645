//! Running every SRE drill over an inventory, exporting and rendering the
//! results.

pub mod text;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use sre_drills_types::DrillReport;
use tracing::info;

use crate::clock::Clock;
use crate::data::{analyze_logs, calculate_backup_time, monitor_disk_usage, run_health_check};
use crate::error::DrillError;
use crate::settings::Settings;

pub use text::{BackupView, DiskView, HealthView, LogView, ReportView};

/// Run every drill the settings have input for.
///
/// Sections with an empty inventory are left out; the log section is only
/// filled in when `log_text` is given. All timestamps come from one read of
/// `clock`.
pub fn run_all(
    settings: &Settings,
    log_text: Option<&str>,
    clock: &dyn Clock,
) -> Result<DrillReport, DrillError> {
    let generated_at = clock.now();
    let pinned = crate::clock::FixedClock::new(generated_at);
    let mut builder = DrillReport::builder().generated_at(generated_at);

    if !settings.servers.is_empty() {
        builder = builder.disk(monitor_disk_usage(settings.servers(), &settings.disk)?);
    }

    if !settings.databases.is_empty() {
        builder = builder.backup(calculate_backup_time(
            settings.databases(),
            settings.backup.network_speed_gbph,
            &pinned,
        )?);
    }

    if let Some(text) = log_text {
        builder = builder.logs(analyze_logs(text, &settings.logs)?);
    }

    if !settings.services.is_empty() {
        builder = builder.health(run_health_check(settings.services(), &settings.health, &pinned));
    }

    Ok(builder.build())
}

/// Render a report as pretty-printed JSON.
pub fn to_json(report: &DrillReport) -> Result<String, DrillError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write a report to a JSON file.
pub fn export_to_file(report: &DrillReport, path: &Path) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(json.as_bytes())?;

    info!(path = %path.display(), "exported drill report");
    Ok(())
}
