//! # sre-drills
//!
//! Sequence warm-ups and SRE drills as a library and a small CLI.
//!
//! Every drill is a pure, single-pass computation over data already in
//! memory: nothing is probed, persisted or shared between calls.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           sre-drills                          │
//! │  ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌─────────┐ │
//! │  │ settings │───▶│   data   │───▶│  report  │───▶│ stdout/ │ │
//! │  │(inventory)│   │ (drills) │    │(text/json)│   │  file   │ │
//! │  └──────────┘    └────┬─────┘    └──────────┘    └─────────┘ │
//! │                       │                                      │
//! │            ┌──────────┴──────────┐                           │
//! │            ▼                     ▼                           │
//! │       ┌─────────┐          ┌──────────┐                      │
//! │       │  clock  │          │  source  │◀── FileSource |      │
//! │       │         │          │  (logs)  │    ReaderSource      │
//! │       └─────────┘          └──────────┘                      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: the drills - sequence scans, disk banding, backup
//!   projection, log tally and health checks
//! - **[`settings`]**: thresholds and inventory, layered from defaults, a
//!   config file and `SRE_DRILLS__*` environment variables
//! - **[`clock`]**: injectable time source for anything timestamped
//! - **[`source`]**: where log text comes from ([`TextSource`])
//! - **[`report`]**: running all SRE drills at once, JSON export and
//!   console rendering
//!
//! ## Usage
//!
//! ```
//! use sre_drills::{monitor_disk_usage, DiskThresholds};
//!
//! let report = monitor_disk_usage(
//!     [("a", 91.0), ("b", 85.0), ("c", 50.0)],
//!     &DiskThresholds::default(),
//! )?;
//!
//! assert_eq!(report.critical, vec!["a"]);
//! assert_eq!(report.warning, vec!["b"]);
//! assert_eq!(report.healthy, vec!["c"]);
//! # Ok::<(), sre_drills::DrillError>(())
//! ```
//!
//! ### Pinning the clock
//!
//! ```
//! use sre_drills::{calculate_backup_time, FixedClock};
//!
//! let clock = FixedClock::parse("2026-01-08 08:00:00").unwrap();
//! let plan = calculate_backup_time([("x", 50.0)], 10.0, &clock)?;
//!
//! assert_eq!(plan.total_hours, 5.0);
//! assert_eq!(plan.completion_display(), "2026-01-08 13:00:00");
//! # Ok::<(), sre_drills::DrillError>(())
//! ```

pub mod clock;
pub mod data;
pub mod error;
pub mod report;
pub mod settings;
pub mod source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use data::{
    analyze_logs, calculate_backup_time, contains_duplicate, find_max, find_min, generate_report,
    monitor_disk_usage, run_health_check, top_k_frequent, two_sum, DiskThresholds, HealthPolicy,
    LogLine, LogOptions, ParseMode,
};
pub use error::DrillError;
pub use settings::Settings;
pub use source::{FileSource, ReaderSource, TextSource};

pub use sre_drills_types as types;
