//! Reader-based text source (stdin, pipes, in-memory buffers).

use std::fmt;
use std::io::Read;

use anyhow::{Context, Result};

use super::TextSource;

/// Reads log text from any `Read` implementation.
pub struct ReaderSource<R> {
    reader: R,
    description: String,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R, description: impl Into<String>) -> Self {
        Self {
            reader,
            description: description.into(),
        }
    }
}

impl ReaderSource<std::io::Stdin> {
    /// Read from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin(), "stdin")
    }
}

impl<R> fmt::Debug for ReaderSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderSource")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<R: Read> TextSource for ReaderSource<R> {
    fn read_text(&mut self) -> Result<String> {
        let mut text = String::new();
        self.reader
            .read_to_string(&mut text)
            .with_context(|| format!("Read error: {}", self.description))?;
        Ok(text)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
