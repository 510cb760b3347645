//! File-based text source.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::TextSource;

/// Reads log text from a file on disk.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn read_text(&mut self) -> Result<String> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Read error: {}", self.path.display()))?;
        debug!(path = %self.path.display(), bytes = text.len(), "read log file");
        Ok(text)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
