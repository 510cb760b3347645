//! DrillReport - every SRE report from one run, bundled for export.

use chrono::NaiveDateTime;

use crate::{BackupPlan, DiskReport, HealthReport, LogReport, SchemaVersion};

/// Reports produced by a single run over an inventory.
///
/// Sections are optional: a run only fills in the drills it had input for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrillReport {
    /// Schema version for forward compatibility.
    pub version: SchemaVersion,

    /// When the run started.
    pub generated_at: NaiveDateTime,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub disk: Option<DiskReport>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub backup: Option<BackupPlan>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub logs: Option<LogReport>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub health: Option<HealthReport>,
}

impl DrillReport {
    pub fn builder() -> DrillReportBuilder {
        DrillReportBuilder::new()
    }

    /// True when no section was filled in.
    pub fn is_empty(&self) -> bool {
        self.disk.is_none() && self.backup.is_none() && self.logs.is_none() && self.health.is_none()
    }
}

/// Builder for `DrillReport`.
#[derive(Debug, Default)]
pub struct DrillReportBuilder {
    generated_at: Option<NaiveDateTime>,
    disk: Option<DiskReport>,
    backup: Option<BackupPlan>,
    logs: Option<LogReport>,
    health: Option<HealthReport>,
}

impl DrillReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generated_at(mut self, at: NaiveDateTime) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn disk(mut self, report: DiskReport) -> Self {
        self.disk = Some(report);
        self
    }

    pub fn backup(mut self, plan: BackupPlan) -> Self {
        self.backup = Some(plan);
        self
    }

    pub fn logs(mut self, report: LogReport) -> Self {
        self.logs = Some(report);
        self
    }

    pub fn health(mut self, report: HealthReport) -> Self {
        self.health = Some(report);
        self
    }

    /// Build the report. Without an explicit time, `generated_at` is the Unix epoch.
    pub fn build(self) -> DrillReport {
        DrillReport {
            version: SchemaVersion::current(),
            generated_at: self.generated_at.unwrap_or_default(),
            disk: self.disk,
            backup: self.backup,
            logs: self.logs,
            health: self.health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Band;

    #[test]
    fn test_builder_sets_sections() {
        let mut disk = DiskReport::new();
        disk.push("web-01", Band::Healthy);

        let report = DrillReport::builder().disk(disk).build();

        assert!(!report.is_empty());
        assert!(report.version.is_compatible());
        assert!(report.backup.is_none());
        assert_eq!(report.generated_at, NaiveDateTime::default());
    }

    #[test]
    fn test_empty_builder() {
        assert!(DrillReport::builder().build().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_skips_missing_sections() {
        let report = DrillReport::builder().build();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("disk").is_none());
        assert_eq!(json["version"]["major"], crate::SCHEMA_VERSION);

        let parsed: DrillReport = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, report);
    }
}
