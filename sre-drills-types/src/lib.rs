//! # sre-drills-types
//!
//! Report types produced by the `sre-drills` computations. Each report is a
//! plain value: built once per invocation, owned by the caller, and safe to
//! serialize and throw away.
//!
//! ## Features
//!
//! - `serde`: JSON (or any serde format) support for every report type.
//!
//! ## Example
//!
//! ```rust
//! use sre_drills_types::{Band, DiskReport, DrillReport};
//! use chrono::NaiveDate;
//!
//! let mut disk = DiskReport::new();
//! disk.push("db-01", Band::Critical);
//! disk.push("web-01", Band::Healthy);
//!
//! let generated_at = NaiveDate::from_ymd_opt(2026, 1, 7)
//!     .and_then(|d| d.and_hms_opt(22, 0, 0))
//!     .unwrap();
//!
//! let report = DrillReport::builder()
//!     .generated_at(generated_at)
//!     .disk(disk)
//!     .build();
//!
//! assert_eq!(report.disk.as_ref().map(|d| d.critical_count), Some(1));
//! ```

mod backup;
mod disk;
mod health;
mod logs;
mod report;
mod status;
mod version;

pub use backup::*;
pub use disk::*;
pub use health::*;
pub use logs::*;
pub use report::*;
pub use status::*;
pub use version::*;

/// Current report schema version.
///
/// Bump this when a report field is renamed or removed.
pub const SCHEMA_VERSION: u32 = 1;
