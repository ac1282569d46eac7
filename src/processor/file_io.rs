//! # File I/O Module
//!
//! Whole-file reads and writes for the processor. Each call opens, uses and
//! closes its own handle, so at most one file is open at a time.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the complete content of a file as raw bytes.
  pub fn read_full_content(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replaces the content of a file.
  ///
  /// The file is truncated and rewritten in place; no backup is kept.
  pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
