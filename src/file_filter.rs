//! # File Filter Module
//!
//! This module contains the rules deciding which paths the processor looks
//! at: the target extension, the generated-code suffix, and the excluded
//! directory markers.
//!
//! File rules match on the file's base name. Directory rules match on the
//! whole directory path as walked, so a marker anywhere in the path prunes
//! the subtree.

use std::path::Path;

use crate::config::HeaderSettings;

/// Result of a file filtering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the path should be processed
  pub should_process: bool,
  /// Reason why the path should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the path should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the path should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter paths based on certain criteria.
pub trait FileFilter: Send + Sync {
  /// Determines whether a path should be processed.
  fn should_process(&self, path: &Path) -> FilterResult;
}

fn file_name_of(path: &Path) -> String {
  path
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_default()
}

/// Keeps files whose name ends with the target extension.
pub struct ExtensionFilter {
  extension: String,
}

impl ExtensionFilter {
  pub fn new(extension: impl Into<String>) -> Self {
    Self {
      extension: extension.into(),
    }
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if file_name_of(path).ends_with(&self.extension) {
      FilterResult::process()
    } else {
      FilterResult::skip(format!("Does not end with '{}'", self.extension))
    }
  }
}

/// Drops files whose name ends with the generated-code suffix.
///
/// The suffix is matched against the raw name, so with `Designer.cs` both
/// `Form1.Designer.cs` and `FormDesigner.cs` are dropped.
pub struct GeneratedFileFilter {
  suffix: String,
}

impl GeneratedFileFilter {
  pub fn new(suffix: impl Into<String>) -> Self {
    Self { suffix: suffix.into() }
  }
}

impl FileFilter for GeneratedFileFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if file_name_of(path).ends_with(&self.suffix) {
      FilterResult::skip(format!("Generated file ('{}')", self.suffix))
    } else {
      FilterResult::process()
    }
  }
}

/// Rejects directories whose path contains any excluded marker.
///
/// Used to prune the walk: a rejected directory is never entered.
pub struct DirectoryFilter {
  markers: Vec<String>,
}

impl DirectoryFilter {
  pub const fn new(markers: Vec<String>) -> Self {
    Self { markers }
  }
}

impl FileFilter for DirectoryFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    let path_str = path.to_string_lossy();
    match self.markers.iter().find(|marker| path_str.contains(marker.as_str())) {
      Some(marker) => FilterResult::skip(format!("Excluded directory ('{}')", marker)),
      None => FilterResult::process(),
    }
  }
}

/// Filter that combines multiple filters.
///
/// The first filter to reject a path wins.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }

  /// Adds a filter to this CompositeFilter.
  pub fn add_filter(&mut self, filter: Box<dyn FileFilter>) {
    self.filters.push(filter);
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    for filter in &self.filters {
      let result = filter.should_process(path);
      if !result.should_process {
        return result;
      }
    }
    FilterResult::process()
  }
}

/// Builds the file-level filter chain from the run settings.
pub fn create_default_filter(settings: &HeaderSettings) -> CompositeFilter {
  let filters: Vec<Box<dyn FileFilter>> = vec![
    Box::new(ExtensionFilter::new(settings.extension.clone())),
    Box::new(GeneratedFileFilter::new(settings.generated_suffix.clone())),
  ];
  CompositeFilter::new(filters)
}
