//! Disk usage banding.
//!
//! Partitions servers into healthy / warning / critical by fixed cutoffs.
//! Both cutoffs are exclusive: a server at exactly the warning cutoff is
//! still healthy.

use serde::Deserialize;
use sre_drills_types::{Band, DiskReport};
use tracing::debug;

use crate::error::{DrillError, Result};

/// Cutoffs (in percent) for the disk usage bands.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskThresholds {
    /// Usage above this is a warning.
    pub warning: f64,
    /// Usage above this is critical.
    pub critical: f64,
}

impl Default for DiskThresholds {
    fn default() -> Self {
        Self {
            warning: 80.0,
            critical: 90.0,
        }
    }
}

impl DiskThresholds {
    pub fn validate(&self) -> Result<()> {
        if !(self.warning.is_finite() && self.critical.is_finite()) || self.warning >= self.critical {
            return Err(DrillError::InvalidThresholds {
                warning: self.warning,
                critical: self.critical,
            });
        }
        Ok(())
    }

    pub fn classify(&self, usage: f64) -> Band {
        if usage > self.critical {
            Band::Critical
        } else if usage > self.warning {
            Band::Warning
        } else {
            Band::Healthy
        }
    }
}

/// Band every server by its disk usage percentage.
///
/// List membership follows the iteration order of `servers`.
pub fn monitor_disk_usage<I, K>(servers: I, thresholds: &DiskThresholds) -> Result<DiskReport>
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    thresholds.validate()?;

    let mut report = DiskReport::new();
    for (name, usage) in servers {
        let name = name.into();
        if !usage.is_finite() {
            return Err(DrillError::InvalidMetric { name });
        }
        let band = thresholds.classify(usage);
        debug!(server = %name, usage, band = band.label(), "classified disk usage");
        report.push(name, band);
    }

    Ok(report)
}
