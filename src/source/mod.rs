//! Text source abstraction for log input.
//!
//! Log text can come from a file or any reader (stdin in the CLI). Both are
//! read once and fully into memory before tallying.

mod file;
mod reader;

pub use file::FileSource;
pub use reader::ReaderSource;

use std::fmt::Debug;

use anyhow::Result;

/// Trait for reading a block of log text.
///
/// # Example
///
/// ```no_run
/// use sre_drills::{FileSource, TextSource};
///
/// let mut source = FileSource::new("fixtures/sample.log");
/// let text = source.read_text()?;
/// println!("{} bytes from {}", text.len(), source.description());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub trait TextSource: Debug {
    /// Read the whole text.
    fn read_text(&mut self) -> Result<String>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;
}
