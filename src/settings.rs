//! Settings and inventory loading.
//!
//! Sources are layered: built-in defaults, then an optional TOML/JSON file,
//! then `SRE_DRILLS__*` environment variables (`__` separates nested keys,
//! e.g. `SRE_DRILLS__DISK__WARNING=75`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use sre_drills_types::ServiceResponse;
use tracing::debug;

use crate::data::{DiskThresholds, HealthPolicy, LogOptions};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "SRE_DRILLS";

/// Disk usage of one server, in percent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerUsage {
    pub name: String,
    pub usage: f64,
}

/// Size of one database to back up, in GB.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseSize {
    pub name: String,
    pub size_gb: f64,
}

/// Observed response of one service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub status: u16,
    pub response_time: f64,
}

impl ServiceEntry {
    pub fn response(&self) -> ServiceResponse {
        ServiceResponse::new(self.status, self.response_time)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackupSettings {
    /// Link speed in GB per hour.
    pub network_speed_gbph: f64,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            network_speed_gbph: 10.0,
        }
    }
}

/// Thresholds, options and the inventory the SRE drills run over.
///
/// Inventory lists are arrays so that report order follows file order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub disk: DiskThresholds,
    pub health: HealthPolicy,
    pub logs: LogOptions,
    pub backup: BackupSettings,
    /// Log file tallied by `run`.
    pub log_file: Option<PathBuf>,
    pub servers: Vec<ServerUsage>,
    pub databases: Vec<DatabaseSize>,
    pub services: Vec<ServiceEntry>,
}

impl Settings {
    /// Load settings from an optional file plus the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load settings with an explicit environment map instead of the
    /// process environment.
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .source(env),
        );

        let config = builder.build().context("Failed to load settings")?;
        let mut settings: Settings = config.try_deserialize().context("Invalid settings")?;

        if let Some(base) = path.and_then(Path::parent) {
            settings.resolve_paths(base);
        }

        debug!(
            servers = settings.servers.len(),
            databases = settings.databases.len(),
            services = settings.services.len(),
            "loaded settings"
        );
        Ok(settings)
    }

    /// Make a relative `log_file` relative to `base`.
    fn resolve_paths(&mut self, base: &Path) {
        if let Some(log_file) = self.log_file.as_mut() {
            if log_file.is_relative() {
                *log_file = base.join(&*log_file);
            }
        }
    }

    pub fn servers(&self) -> impl Iterator<Item = (&str, f64)> {
        self.servers.iter().map(|s| (s.name.as_str(), s.usage))
    }

    pub fn databases(&self) -> impl Iterator<Item = (&str, f64)> {
        self.databases.iter().map(|d| (d.name.as_str(), d.size_gb))
    }

    pub fn services(&self) -> impl Iterator<Item = (&str, ServiceResponse)> {
        self.services.iter().map(|s| (s.name.as_str(), s.response()))
    }
}
