//! Log tallying.
//!
//! Lines have the shape `<date> <time> <LEVEL> <message...>`. The tally
//! counts lines per level, ranks the messages of error lines and reports the
//! error share of all counted lines.

use std::collections::HashMap;

use serde::Deserialize;
use sre_drills_types::{LevelCount, LogReport, MessageCount};
use tracing::{debug, warn};

use crate::error::{DrillError, Result};

/// How to treat lines that do not carry a date, time and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Fail on the first malformed line.
    #[default]
    Strict,
    /// Skip malformed lines and count them.
    Lenient,
}

/// Options for [`analyze_logs`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// Level tag counted as an error.
    pub error_level: String,
    /// How many error messages to rank.
    pub top_errors: usize,
    pub mode: ParseMode,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            error_level: "ERROR".to_string(),
            top_errors: 3,
            mode: ParseMode::Strict,
        }
    }
}

/// A tokenized log line borrowing from the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub level: &'a str,
    /// Tokens after the level, joined by single spaces.
    pub message: String,
}

impl<'a> LogLine<'a> {
    /// Tokenize one line. `line_no` is 1-based and only used for errors.
    pub fn parse(line: &'a str, line_no: usize) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(date), Some(time), Some(level)) => Ok(Self {
                date,
                time,
                level,
                message: tokens.collect::<Vec<_>>().join(" "),
            }),
            _ => Err(DrillError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            }),
        }
    }
}

/// Tally a block of log text.
pub fn analyze_logs(text: &str, options: &LogOptions) -> Result<LogReport> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DrillError::EmptyInput);
    }

    let mut levels = Tally::default();
    let mut errors = Tally::default();
    let mut total_lines = 0;
    let mut skipped_lines = 0;

    for (idx, raw) in text.split('\n').enumerate() {
        let line = match LogLine::parse(raw, idx + 1) {
            Ok(line) => line,
            Err(err) if options.mode == ParseMode::Lenient => {
                warn!(%err, "skipping malformed log line");
                skipped_lines += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        total_lines += 1;
        levels.add(line.level.to_string());
        if line.level == options.error_level {
            errors.add(line.message);
        }
    }

    let error_count = levels.get(&options.error_level);
    let error_rate = if total_lines == 0 {
        0.0
    } else {
        error_count as f64 / total_lines as f64 * 100.0
    };

    debug!(total_lines, skipped_lines, error_count, "tallied log text");

    Ok(LogReport {
        counts: levels
            .into_counts()
            .into_iter()
            .map(|(level, count)| LevelCount { level, count })
            .collect(),
        top_errors: errors
            .most_common(options.top_errors)
            .into_iter()
            .map(|(message, count)| MessageCount { message, count })
            .collect(),
        error_rate,
        total_lines,
        skipped_lines,
    })
}

/// Counter that remembers first-appearance order.
#[derive(Debug, Default)]
struct Tally {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl Tally {
    fn add(&mut self, key: String) {
        match self.index.get(&key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&slot| self.counts[slot].1)
    }

    fn into_counts(self) -> Vec<(String, usize)> {
        self.counts
    }

    fn most_common(self, n: usize) -> Vec<(String, usize)> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts
    }
}
