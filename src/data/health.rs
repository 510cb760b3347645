//! Simulated health checks.
//!
//! Services are evaluated against supplied status/latency pairs; nothing is
//! probed over the network.

use std::time::Duration;

use serde::Deserialize;
use sre_drills_types::{HealthReport, ServiceResponse, ServiceState};
use tracing::debug;

use super::duration::deserialize_duration;
use crate::clock::Clock;
use crate::error::Result;

/// Rule a service response must satisfy to count as healthy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HealthPolicy {
    /// Status code a healthy service answers with.
    pub expected_status: u16,
    /// Responses must be strictly faster than this.
    #[serde(deserialize_with = "deserialize_duration")]
    pub max_response_time: Duration,
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self {
            expected_status: 200,
            max_response_time: Duration::from_secs(2),
        }
    }
}

impl HealthPolicy {
    pub fn is_healthy(&self, response: &ServiceResponse) -> bool {
        response.status == self.expected_status
            && response.response_time < self.max_response_time.as_secs_f64()
    }

    pub fn evaluate(&self, response: &ServiceResponse) -> ServiceState {
        ServiceState::from_healthy(self.is_healthy(response))
    }
}

/// Evaluate every service and summarize the outcome.
///
/// The report timestamp is read from `clock` once, before any service is
/// evaluated. Service order follows `services`.
pub fn run_health_check<I, K>(services: I, policy: &HealthPolicy, clock: &dyn Clock) -> HealthReport
where
    I: IntoIterator<Item = (K, ServiceResponse)>,
    K: Into<String>,
{
    let mut report = HealthReport::new(clock.now());

    for (name, response) in services {
        let name = name.into();
        let state = policy.evaluate(&response);
        debug!(
            service = %name,
            status = response.status,
            response_time = response.response_time,
            state = state.label(),
            "evaluated service"
        );
        report.record(name, state);
    }

    report
}

/// Render a health report as pretty-printed JSON.
pub fn generate_report(report: &HealthReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
