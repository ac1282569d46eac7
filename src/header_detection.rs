//! # Header Detection Module
//!
//! This module decides whether a file already carries a copyright header.
//! The check sits behind a trait so library users can plug in their own
//! detection without touching the processor.

/// Trait for header detectors.
///
/// Implementations are handed the full, raw content of a candidate file.
pub trait HeaderDetector: Send + Sync {
  /// Returns `true` if `content` already has a header and must not be
  /// stamped again.
  fn has_header(&self, content: &[u8]) -> bool;
}

/// Default detector: a plain substring search for a marker.
///
/// The whole file is searched, not just its first lines, and the comparison
/// is case-sensitive. An empty marker is found in every file.
#[derive(Debug, Clone)]
pub struct MarkerDetector {
  marker: Vec<u8>,
}

impl MarkerDetector {
  /// Creates a detector looking for `marker`.
  pub fn new(marker: impl Into<String>) -> Self {
    Self {
      marker: marker.into().into_bytes(),
    }
  }
}

impl HeaderDetector for MarkerDetector {
  fn has_header(&self, content: &[u8]) -> bool {
    if self.marker.is_empty() {
      return true;
    }

    content.windows(self.marker.len()).any(|window| window == self.marker.as_slice())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_marker_detector() {
    let detector = MarkerDetector::new("copyright file=");

    let stamped = b"// <copyright file=\"Foo.cs\" company=\"ACME\">\nclass Foo {}\n";
    assert!(detector.has_header(stamped));

    let bare = b"namespace Foo {\n  class Bar {}\n}\n";
    assert!(!detector.has_header(bare));
  }

  #[test]
  fn test_marker_found_anywhere_in_file() {
    let detector = MarkerDetector::new("copyright file=");
    let mut content = vec![b'x'; 4096];
    content.extend_from_slice(b"// copyright file=late");
    assert!(detector.has_header(&content));
  }

  #[test]
  fn test_marker_is_case_sensitive() {
    let detector = MarkerDetector::new("copyright file=");
    assert!(!detector.has_header(b"// Copyright File=Foo.cs\n"));
  }

  #[test]
  fn test_generated_header_does_not_satisfy_default_marker() {
    // "// copyright Foo.cs" is what a "// copyright FILENAME" template writes,
    // and it does not contain the default marker.
    let detector = MarkerDetector::new("copyright file=");
    assert!(!detector.has_header(b"// copyright Foo.cs\nclass Foo {}\n"));
  }

  #[test]
  fn test_non_utf8_content() {
    let detector = MarkerDetector::new("copyright file=");
    let mut content = vec![0xEF, 0xBB, 0xBF, 0xFF, 0xFE];
    content.extend_from_slice(b"copyright file=");
    assert!(detector.has_header(&content));
    assert!(!detector.has_header(&[0xFF, 0xFE, 0x00]));
  }

  #[test]
  fn test_empty_marker_always_matches() {
    let detector = MarkerDetector::new("");
    assert!(detector.has_header(b""));
    assert!(detector.has_header(b"anything"));
  }

  #[test]
  fn test_content_shorter_than_marker() {
    let detector = MarkerDetector::new("copyright file=");
    assert!(!detector.has_header(b"copy"));
    assert!(!detector.has_header(b""));
  }
}
