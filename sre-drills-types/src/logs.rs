//! Log tally report.

/// Number of lines carrying a level tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelCount {
    pub level: String,
    pub count: usize,
}

/// Number of error lines carrying the same message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageCount {
    pub message: String,
    pub count: usize,
}

/// Result of tallying a block of log text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogReport {
    /// Level counts in order of first appearance.
    pub counts: Vec<LevelCount>,
    /// Most frequent error messages, highest count first.
    pub top_errors: Vec<MessageCount>,
    /// Error lines as a percentage of counted lines.
    pub error_rate: f64,
    /// Lines that were tallied.
    pub total_lines: usize,
    /// Malformed lines skipped in lenient mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skipped_lines: usize,
}

impl LogReport {
    /// Count for a level tag, zero when the level never appeared.
    pub fn count(&self, level: &str) -> usize {
        self.counts
            .iter()
            .find(|c| c.level == level)
            .map_or(0, |c| c.count)
    }

    /// The most frequent error message, if any error lines were seen.
    pub fn top_error(&self) -> Option<&MessageCount> {
        self.top_errors.first()
    }
}
