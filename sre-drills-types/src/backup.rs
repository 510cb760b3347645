//! Backup plan: per-database transfer hours and projected completion.

use chrono::NaiveDateTime;

/// Display format for the projected completion time.
pub const COMPLETION_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Estimated transfer time for a single database.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatabaseEstimate {
    pub name: String,
    pub size_gb: f64,
    pub hours: f64,
}

/// Backup schedule for a set of databases over one network link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackupPlan {
    /// Estimates in input order.
    pub databases: Vec<DatabaseEstimate>,
    pub total_hours: f64,
    pub network_speed_gbph: f64,
    #[cfg_attr(feature = "serde", serde(with = "completion_format"))]
    pub estimated_completion: NaiveDateTime,
}

impl BackupPlan {
    /// Hours estimated for the named database.
    pub fn hours_for(&self, name: &str) -> Option<f64> {
        self.databases.iter().find(|d| d.name == name).map(|d| d.hours)
    }

    /// Completion time rendered as `YYYY-MM-DD HH:MM:SS`.
    pub fn completion_display(&self) -> String {
        self.estimated_completion.format(COMPLETION_FORMAT).to_string()
    }
}

#[cfg(feature = "serde")]
mod completion_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::COMPLETION_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(COMPLETION_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, COMPLETION_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn plan() -> BackupPlan {
        let start = NaiveDate::from_ymd_opt(2026, 1, 8)
            .and_then(|d| d.and_hms_opt(21, 0, 0))
            .unwrap();
        BackupPlan {
            databases: vec![DatabaseEstimate {
                name: "users_db".to_string(),
                size_gb: 50.0,
                hours: 5.0,
            }],
            total_hours: 5.0,
            network_speed_gbph: 10.0,
            estimated_completion: start,
        }
    }

    #[test]
    fn test_hours_for() {
        let plan = plan();
        assert_eq!(plan.hours_for("users_db"), Some(5.0));
        assert_eq!(plan.hours_for("orders_db"), None);
    }

    #[test]
    fn test_completion_display() {
        assert_eq!(plan().completion_display(), "2026-01-08 21:00:00");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_completion_serialized_with_space_separator() {
        let json = serde_json::to_value(plan()).unwrap();
        assert_eq!(json["estimated_completion"], "2026-01-08 21:00:00");

        let parsed: BackupPlan = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, plan());
    }
}
