//! Schema versioning for exported reports.

use crate::SCHEMA_VERSION;

/// Schema version embedded in exported reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaVersion {
    /// Major version - breaking changes increment this.
    pub major: u32,

    /// Minor version - backwards-compatible additions increment this.
    pub minor: u32,
}

impl SchemaVersion {
    /// The version written by this library.
    pub const fn current() -> Self {
        Self {
            major: SCHEMA_VERSION,
            minor: 0,
        }
    }

    /// Returns true if the major version matches the current one.
    pub fn is_compatible(&self) -> bool {
        self.major == SCHEMA_VERSION
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_compatible() {
        assert!(SchemaVersion::current().is_compatible());
        assert!(SchemaVersion { major: SCHEMA_VERSION, minor: 7 }.is_compatible());
        assert!(!SchemaVersion { major: SCHEMA_VERSION + 1, minor: 0 }.is_compatible());
    }
}
