//! The drill computations.
//!
//! Every function here is a pure, single-pass computation over data already
//! in memory. Anything time-dependent reads the time from a
//! [`Clock`](crate::clock::Clock).
//!
//! ## Submodules
//!
//! - [`sequence`]: duplicate detection, min/max, two-sum, top-K frequency
//! - [`disk`]: disk usage banding ([`DiskThresholds`])
//! - [`backup`]: backup time projection
//! - [`logs`]: log line tally ([`LogOptions`])
//! - [`health`]: simulated health checks ([`HealthPolicy`])
//! - [`duration`]: parsing and formatting of duration strings (e.g. "2s", "500ms")
//!
//! ## Data Flow
//!
//! ```text
//! Settings (inventory + thresholds)
//!        │
//!        ├──▶ monitor_disk_usage()    ──▶ DiskReport
//!        ├──▶ calculate_backup_time() ──▶ BackupPlan   (Clock)
//!        ├──▶ analyze_logs()          ──▶ LogReport    (TextSource)
//!        └──▶ run_health_check()      ──▶ HealthReport (Clock)
//! ```

pub mod backup;
pub mod disk;
pub mod duration;
pub mod health;
pub mod logs;
pub mod sequence;

pub use backup::calculate_backup_time;
pub use disk::{monitor_disk_usage, DiskThresholds};
pub use health::{generate_report, run_health_check, HealthPolicy};
pub use logs::{analyze_logs, LogLine, LogOptions, ParseMode};
pub use sequence::{contains_duplicate, find_max, find_min, top_k_frequent, two_sum};
