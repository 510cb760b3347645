//! Health check inputs and report.

use chrono::NaiveDateTime;

use crate::ServiceState;

/// Observed response of a service: HTTP-style status and latency in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceResponse {
    pub status: u16,
    pub response_time: f64,
}

impl ServiceResponse {
    pub const fn new(status: u16, response_time: f64) -> Self {
        Self {
            status,
            response_time,
        }
    }
}

/// Evaluated state of a named service.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceStatus {
    pub name: String,
    pub status: ServiceState,
}

/// Summary of a health check run.
///
/// The timestamp is captured once, when the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthReport {
    pub timestamp: NaiveDateTime,
    pub total_services: usize,
    pub healthy_count: usize,
    pub unhealthy_count: usize,
    pub services: Vec<ServiceStatus>,
}

impl HealthReport {
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            total_services: 0,
            healthy_count: 0,
            unhealthy_count: 0,
            services: Vec::new(),
        }
    }

    /// Record the outcome for one service.
    pub fn record(&mut self, name: impl Into<String>, status: ServiceState) {
        if status.is_healthy() {
            self.healthy_count += 1;
        } else {
            self.unhealthy_count += 1;
        }
        self.total_services += 1;
        self.services.push(ServiceStatus {
            name: name.into(),
            status,
        });
    }

    /// Names of services that failed the check, in input order.
    pub fn unhealthy_services(&self) -> Vec<&str> {
        self.services
            .iter()
            .filter(|s| !s.status.is_healthy())
            .map(|s| s.name.as_str())
            .collect()
    }

    pub fn is_all_healthy(&self) -> bool {
        self.unhealthy_count == 0
    }
}
