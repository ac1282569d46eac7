//! # File Collector Module
//!
//! Walks the directory tree and yields candidate files. Excluded directories
//! are pruned during the walk, so their subtrees are never read.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::HeaderSettings;
use crate::file_filter::{CompositeFilter, DirectoryFilter, FileFilter, create_default_filter};

/// File collector for directory traversal.
///
/// The `FileCollector` handles:
/// - Pruning directories that match an excluded marker
/// - Following symlinks to regular files, never into symlinked directories
/// - Applying the extension and generated-suffix rules to file names
pub struct FileCollector {
  /// Rules applied to directories before descending
  dir_filter: DirectoryFilter,
  /// Rules applied to files
  file_filter: CompositeFilter,
}

impl FileCollector {
  /// Creates a collector using the filters described by `settings`.
  pub fn new(settings: &HeaderSettings) -> Self {
    Self {
      dir_filter: DirectoryFilter::new(settings.exclude_dirs.clone()),
      file_filter: create_default_filter(settings),
    }
  }

  /// Lazily yields candidate files under `root`.
  ///
  /// Entries come in the order the filesystem returns them. Paths keep the
  /// form of `root`, so walking `.` yields paths like `./src/Foo.cs`.
  /// Excluded markers are matched against the path below `root`, so the
  /// root's own ancestors never prune the walk. Unreadable directories are
  /// logged and skipped.
  pub fn candidates<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
      .follow_links(false)
      .into_iter()
      .filter_entry(move |entry| self.should_enter(entry, root))
      .filter_map(move |entry| match entry {
        Ok(entry) => self.candidate_path(entry),
        Err(e) => {
          warn!("Skipping unreadable path: {}", e);
          None
        }
      })
  }

  /// Collects every candidate under `root` into a vector.
  pub fn collect(&self, root: &Path) -> Vec<PathBuf> {
    self.candidates(root).collect()
  }

  /// Exclusions only look at the part of the path below `root`.
  fn should_enter(&self, entry: &DirEntry, root: &Path) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
      return true;
    }

    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    let result = self.dir_filter.should_process(relative);
    if let Some(reason) = result.reason {
      trace!("Pruning: {} ({})", entry.path().display(), reason);
    }
    result.should_process
  }

  fn candidate_path(&self, entry: DirEntry) -> Option<PathBuf> {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
      // Links to regular files are stamped through; anything else is skipped
      match fs::metadata(entry.path()) {
        Ok(target) if target.is_file() => {}
        Ok(_) => {
          trace!("Skipping: {} (symlink to non-file)", entry.path().display());
          return None;
        }
        Err(e) => {
          warn!("Skipping broken symlink {}: {}", entry.path().display(), e);
          return None;
        }
      }
    } else if !file_type.is_file() {
      return None;
    }

    let result = self.file_filter.should_process(entry.path());
    if !result.should_process {
      trace!(
        "Skipping: {} ({})",
        entry.path().display(),
        result.reason.as_deref().unwrap_or("Unknown reason")
      );
      return None;
    }

    Some(entry.into_path())
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  fn collect_names(root: &Path) -> Vec<String> {
    let collector = FileCollector::new(&HeaderSettings::default());
    let mut names: Vec<String> = collector
      .collect(root)
      .iter()
      .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
      .collect();
    names.sort();
    names
  }

  #[test]
  fn test_collects_matching_files_recursively() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/nested")).unwrap();
    fs::write(root.join("Program.cs"), "").unwrap();
    fs::write(root.join("src/nested/Deep.cs"), "").unwrap();
    fs::write(root.join("src/readme.md"), "").unwrap();

    assert_eq!(collect_names(root), vec!["Program.cs", "src/nested/Deep.cs"]);
  }

  #[test]
  fn test_skips_generated_files() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("Form1.cs"), "").unwrap();
    fs::write(root.join("Form1.Designer.cs"), "").unwrap();

    assert_eq!(collect_names(root), vec!["Form1.cs"]);
  }

  #[test]
  fn test_prunes_excluded_directories() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join(".git/objects")).unwrap();
    fs::create_dir_all(root.join("Extras/Sub")).unwrap();
    fs::create_dir_all(root.join("Lib")).unwrap();
    fs::write(root.join(".git/objects/Hook.cs"), "").unwrap();
    fs::write(root.join("Extras/Bar.cs"), "").unwrap();
    fs::write(root.join("Extras/Sub/Baz.cs"), "").unwrap();
    fs::write(root.join("Lib/Keep.cs"), "").unwrap();

    assert_eq!(collect_names(root), vec!["Lib/Keep.cs"]);
  }

  #[test]
  fn test_paths_keep_root_form() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("A.cs"), "").unwrap();

    let collector = FileCollector::new(&HeaderSettings::default());
    let files = collector.collect(root);
    assert_eq!(files, vec![root.join("A.cs")]);
  }

  #[test]
  fn test_root_is_never_pruned() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("Extras");
    fs::create_dir_all(root.join("Sub")).unwrap();
    fs::write(root.join("Top.cs"), "").unwrap();
    fs::write(root.join("Sub/Inner.cs"), "").unwrap();

    fs::create_dir_all(root.join("Extras")).unwrap();
    fs::write(root.join("Extras/Skip.cs"), "").unwrap();

    assert_eq!(collect_names(&root), vec!["Sub/Inner.cs", "Top.cs"]);
  }

  #[cfg(unix)]
  #[test]
  fn test_file_symlinks_are_candidates() {
    let temp_dir = tempdir().unwrap();
    let outside = temp_dir.path().join("outside");
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(&outside).unwrap();
    fs::create_dir_all(&root).unwrap();
    fs::write(outside.join("Target.cs"), "").unwrap();
    std::os::unix::fs::symlink(outside.join("Target.cs"), root.join("Link.cs")).unwrap();
    std::os::unix::fs::symlink(outside.join("Missing.cs"), root.join("Broken.cs")).unwrap();

    assert_eq!(collect_names(&root), vec!["Link.cs"]);
  }

  #[cfg(unix)]
  #[test]
  fn test_directory_symlinks_are_not_descended() {
    let temp_dir = tempdir().unwrap();
    let outside = temp_dir.path().join("outside");
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(&outside).unwrap();
    fs::create_dir_all(&root).unwrap();
    fs::write(outside.join("Hidden.cs"), "").unwrap();
    fs::write(root.join("Real.cs"), "").unwrap();
    std::os::unix::fs::symlink(&outside, root.join("linked")).unwrap();

    assert_eq!(collect_names(&root), vec!["Real.cs"]);
  }
}
