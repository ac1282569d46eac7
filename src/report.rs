//! # Report Module
//!
//! Records what happened to each considered file and summarises the run.
//! The records can be written out as a JSON report with `--report-json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Information about a considered file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file, as walked
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// What happened to the file
  pub action: FileAction,
}

impl FileReport {
  pub fn new(path: impl Into<PathBuf>, action: FileAction) -> Self {
    Self {
      path: path.into(),
      action,
    }
  }
}

/// Outcome for a considered file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileAction {
  /// The header was prepended to the file
  Stamped,
  /// The file already contained the marker and was left alone
  AlreadyStamped,
  /// Check mode: the file lacks the marker and would be stamped
  MissingHeader,
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Counts for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingSummary {
  /// Files that passed the filters and were read
  pub total_files: usize,
  /// Files that received a header
  pub stamped: usize,
  /// Files that already had the marker
  pub already_stamped: usize,
  /// Files lacking the marker in check mode
  pub missing: usize,
  /// Wall-clock duration of the run in milliseconds
  pub elapsed_ms: u64,
}

impl ProcessingSummary {
  pub fn from_reports(reports: &[FileReport], elapsed: Duration) -> Self {
    let count = |action: FileAction| reports.iter().filter(|r| r.action == action).count();

    Self {
      total_files: reports.len(),
      stamped: count(FileAction::Stamped),
      already_stamped: count(FileAction::AlreadyStamped),
      missing: count(FileAction::MissingHeader),
      elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    }
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Writes a JSON report of the run to `output_path`.
pub fn write_json_report(output_path: &Path, reports: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
  let report = JsonReport {
    summary,
    files: reports,
  };

  let json = serde_json::to_string_pretty(&report).with_context(|| "Failed to serialize report")?;

  fs::write(output_path, json).with_context(|| format!("Failed to write report: {}", output_path.display()))
}
