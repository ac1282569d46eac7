//! # Processor Module
//!
//! This module contains the core pass: walk the tree, pick out candidate
//! files, and prepend the header to each one that lacks the marker.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`content_transformer`] - Building the stamped content
//! - [`file_collector`] - Directory traversal and filtering
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules. Processing is sequential: each file is read, possibly
//! rewritten, and released before the walk moves on.

mod content_transformer;
mod file_collector;
mod file_io;

use std::path::Path;

use anyhow::{Result, bail};
pub use content_transformer::ContentTransformer;
pub use file_collector::FileCollector;
pub use file_io::FileIO;
use tracing::debug;

use crate::config::HeaderSettings;
use crate::diff::DiffManager;
use crate::header_detection::{HeaderDetector, MarkerDetector};
use crate::info_log;
use crate::report::{FileAction, FileReport};
use crate::templates::HeaderTemplate;

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub template: HeaderTemplate,
  pub settings: HeaderSettings,

  /// Report missing headers instead of writing them
  pub check_only: bool,

  // Optional components
  pub diff_manager: Option<DiffManager>,
  pub header_detector: Option<Box<dyn HeaderDetector>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(template, settings)
  /// }
  /// ```
  pub fn new(template: HeaderTemplate, settings: HeaderSettings) -> Self {
    Self {
      template,
      settings,
      check_only: false,
      diff_manager: None,
      header_detector: None,
    }
  }
}

/// Processor for stamping headers onto a source tree.
///
/// The `Processor` is responsible for:
/// - Walking the tree while pruning excluded directories
/// - Printing each considered file to the progress log
/// - Checking each file for the marker
/// - Prepending the rendered header where the marker is missing
/// - Showing diffs instead of writing in check mode
pub struct Processor {
  /// Walks the tree and applies the filters
  file_collector: FileCollector,

  /// Builds stamped content from the template
  content_transformer: ContentTransformer,

  /// Decides whether a file already has its header
  header_detector: Box<dyn HeaderDetector>,

  /// Whether to only check for headers without modifying files
  check_only: bool,

  /// Manager for rendering diffs in check mode
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  pub fn new(config: ProcessorConfig) -> Self {
    let header_detector = config
      .header_detector
      .unwrap_or_else(|| Box::new(MarkerDetector::new(config.settings.marker.clone())));

    Self {
      file_collector: FileCollector::new(&config.settings),
      content_transformer: ContentTransformer::new(config.template),
      header_detector,
      check_only: config.check_only,
      diff_manager: config.diff_manager.unwrap_or_default(),
    }
  }

  /// Processes every candidate file under `root`.
  ///
  /// Each candidate's path is printed before it is read, whether or not it
  /// ends up modified.
  ///
  /// # Errors
  ///
  /// Returns an error if `root` is not a directory, or as soon as a
  /// candidate cannot be read or written. Files handled before the failure
  /// keep their new content; later files are not touched.
  pub fn process(&self, root: &Path) -> Result<Vec<FileReport>> {
    if !root.is_dir() {
      bail!("Root directory does not exist or is not a directory: {}", root.display());
    }

    debug!("Scanning directory: {}", root.display());
    let start_time = std::time::Instant::now();

    let mut reports = Vec::new();
    for path in self.file_collector.candidates(root) {
      info_log!("{}", path.display());
      let action = self.process_file(&path)?;
      reports.push(FileReport::new(path, action));
    }

    debug!(
      "Processed {} files in {}ms",
      reports.len(),
      start_time.elapsed().as_millis()
    );

    Ok(reports)
  }

  /// Processes a single file, regardless of the filters.
  pub fn process_file(&self, path: &Path) -> Result<FileAction> {
    let content = FileIO::read_full_content(path)?;

    if self.header_detector.has_header(&content) {
      debug!("Header already present: {}", path.display());
      return Ok(FileAction::AlreadyStamped);
    }

    let file_name = path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_default();
    let stamped = self.content_transformer.prepend_header(&file_name, &content);

    if self.check_only {
      self.diff_manager.display_diff(
        path,
        &String::from_utf8_lossy(&content),
        &String::from_utf8_lossy(&stamped),
      );
      return Ok(FileAction::MissingHeader);
    }

    FileIO::write_file(path, &stamped)?;
    debug!("Stamped header into: {}", path.display());

    Ok(FileAction::Stamped)
  }
}
