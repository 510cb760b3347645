//! Status enums shared by the reports.

use core::fmt;

/// Threshold band for a named metric.
///
/// Ordered by severity so that `max()` picks the worst band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Band {
    Healthy,
    Warning,
    Critical,
}

impl Band {
    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Band::Healthy => "OK",
            Band::Warning => "WARN",
            Band::Critical => "CRIT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Healthy => "healthy",
            Band::Warning => "warning",
            Band::Critical => "critical",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of evaluating a single service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ServiceState {
    Healthy,
    Unhealthy,
}

impl ServiceState {
    pub fn from_healthy(healthy: bool) -> Self {
        if healthy {
            ServiceState::Healthy
        } else {
            ServiceState::Unhealthy
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, ServiceState::Healthy)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceState::Healthy => "healthy",
            ServiceState::Unhealthy => "unhealthy",
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
