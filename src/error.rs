//! Error types for the drills.

use thiserror::Error;

/// Errors returned by the drill computations.
///
/// Each variant names an input the computation cannot give a meaningful
/// answer for; nothing here is retried.
#[derive(Debug, Error)]
pub enum DrillError {
    /// The input sequence or text had nothing to work on.
    #[error("input is empty")]
    EmptyInput,

    /// Network speed was zero, negative or not a number.
    #[error("network speed must be a positive number, got {0}")]
    InvalidSpeed(f64),

    /// A database size was negative or not a number.
    #[error("size of `{name}` must be a non-negative number, got {size}")]
    InvalidSize { name: String, size: f64 },

    /// A metric value was not a finite number.
    #[error("metric for `{name}` is not a finite number")]
    InvalidMetric { name: String },

    /// Warning cutoff must sit below the critical cutoff.
    #[error("warning threshold {warning} must be below critical threshold {critical}")]
    InvalidThresholds { warning: f64, critical: f64 },

    /// The projected completion time is outside the representable range.
    #[error("projected completion is out of range (+{hours} hours)")]
    TimeOverflow { hours: f64 },

    /// A log line did not have a date, time and level token.
    #[error("line {line} is malformed: expected `<date> <time> <LEVEL> [message]`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    /// Failed to render a report as JSON.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T, E = DrillError> = std::result::Result<T, E>;
