//! Disk usage report: servers partitioned into threshold bands.

use crate::Band;

/// Servers grouped by disk usage band.
///
/// Membership order within each list follows the order servers were pushed.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiskReport {
    pub warning: Vec<String>,
    pub critical: Vec<String>,
    pub healthy: Vec<String>,
    pub warning_count: usize,
    pub critical_count: usize,
    pub healthy_count: usize,
}

impl DiskReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a server to the list for `band` and bump its count.
    pub fn push(&mut self, name: impl Into<String>, band: Band) {
        let name = name.into();
        match band {
            Band::Healthy => {
                self.healthy.push(name);
                self.healthy_count += 1;
            }
            Band::Warning => {
                self.warning.push(name);
                self.warning_count += 1;
            }
            Band::Critical => {
                self.critical.push(name);
                self.critical_count += 1;
            }
        }
    }

    /// Servers in the given band.
    pub fn members(&self, band: Band) -> &[String] {
        match band {
            Band::Healthy => &self.healthy,
            Band::Warning => &self.warning,
            Band::Critical => &self.critical,
        }
    }

    pub fn total(&self) -> usize {
        self.healthy_count + self.warning_count + self.critical_count
    }

    /// Worst band present, or `Healthy` for an empty report.
    pub fn worst(&self) -> Band {
        if self.critical_count > 0 {
            Band::Critical
        } else if self.warning_count > 0 {
            Band::Warning
        } else {
            Band::Healthy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_counts() {
        let mut report = DiskReport::new();
        report.push("web-02", Band::Warning);
        report.push("db-01", Band::Critical);
        report.push("api-01", Band::Warning);

        assert_eq!(report.warning, vec!["web-02", "api-01"]);
        assert_eq!(report.warning_count, 2);
        assert_eq!(report.critical_count, 1);
        assert_eq!(report.healthy_count, 0);
        assert_eq!(report.total(), 3);
        assert_eq!(report.worst(), Band::Critical);
    }
}
