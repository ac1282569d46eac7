//! # Templates Module
//!
//! This module loads the header template and renders it for individual files.
//!
//! A template is plain text containing a placeholder token (`FILENAME` by
//! default). Rendering replaces every occurrence of the token with the base
//! name of the file being stamped. A template without the token is inserted
//! verbatim. Templates are bytes, so any encoding the target files use is
//! carried through unchanged.
//!
//! ## Example
//!
//! ```rust
//! use copyhead::templates::HeaderTemplate;
//!
//! let template = HeaderTemplate::new("// <copyright file=\"FILENAME\">\n", "FILENAME");
//! assert_eq!(template.render("Program.cs"), b"// <copyright file=\"Program.cs\">\n");
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::verbose_log;

/// A header template and the placeholder it is rendered with.
///
/// The template is loaded once per run and shared, read-only, by every file
/// the processor stamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
  /// The raw template bytes
  text: Vec<u8>,
  /// Token replaced with each file's base name
  placeholder: String,
}

impl HeaderTemplate {
  /// Creates a template from in-memory text.
  pub fn new(text: impl Into<Vec<u8>>, placeholder: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      placeholder: placeholder.into(),
    }
  }

  /// Loads a template from a file.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  /// - The file does not exist
  /// - The file cannot be read
  pub fn load(path: &Path, placeholder: &str) -> Result<Self> {
    verbose_log!("Loading template from: {}", path.display());

    let text = fs::read(path).with_context(|| format!("Failed to read header template: {}", path.display()))?;

    if !placeholder.is_empty() && find(&text, placeholder.as_bytes()).is_none() {
      verbose_log!("Template has no '{}' placeholder; it will be inserted as-is", placeholder);
    }

    Ok(Self::new(text, placeholder))
  }

  /// Returns the raw template bytes.
  pub fn text(&self) -> &[u8] {
    &self.text
  }

  /// Returns the placeholder token.
  pub fn placeholder(&self) -> &str {
    &self.placeholder
  }

  /// Renders the header for a file with the given base name.
  ///
  /// Every occurrence of the placeholder is replaced. An empty placeholder
  /// matches before every byte and once more at the end.
  pub fn render(&self, file_name: &str) -> Vec<u8> {
    let needle = self.placeholder.as_bytes();
    let name = file_name.as_bytes();
    let mut rendered = Vec::with_capacity(self.text.len() + name.len());

    if needle.is_empty() {
      for &byte in &self.text {
        rendered.extend_from_slice(name);
        rendered.push(byte);
      }
      rendered.extend_from_slice(name);
      return rendered;
    }

    let mut rest = self.text.as_slice();
    while let Some(pos) = find(rest, needle) {
      let (before, after) = rest.split_at(pos);
      rendered.extend_from_slice(before);
      rendered.extend_from_slice(name);
      rest = after.get(needle.len()..).unwrap_or_default();
    }
    rendered.extend_from_slice(rest);
    rendered
  }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
  haystack.windows(needle.len()).position(|window| window == needle)
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_render_replaces_every_placeholder() {
    let template = HeaderTemplate::new("// FILENAME\n// see FILENAME\n", "FILENAME");
    assert_eq!(template.render("Foo.cs"), b"// Foo.cs\n// see Foo.cs\n");
  }

  #[test]
  fn test_render_without_placeholder() {
    let template = HeaderTemplate::new("// Copyright ACME\n", "FILENAME");
    assert_eq!(template.render("Foo.cs"), b"// Copyright ACME\n");
  }

  #[test]
  fn test_render_placeholder_is_case_sensitive() {
    let template = HeaderTemplate::new("// filename FILENAME\n", "FILENAME");
    assert_eq!(template.render("Bar.cs"), b"// filename Bar.cs\n");
  }

  #[test]
  fn test_render_adjacent_placeholders() {
    let template = HeaderTemplate::new("FILENAMEFILENAME", "FILENAME");
    assert_eq!(template.render("A.cs"), b"A.csA.cs");
  }

  #[test]
  fn test_render_empty_placeholder_matches_str_replace() {
    let template = HeaderTemplate::new("ab", "");
    assert_eq!(template.render("X"), "ab".replace("", "X").into_bytes());
  }

  #[test]
  fn test_load_non_utf8_template() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("latin1.template");
    // "// (c) Soci\xe9t\xe9 FILENAME" in Latin-1
    let mut raw = b"// (c) Soci\xe9t\xe9 ".to_vec();
    raw.extend_from_slice(b"FILENAME\n");
    fs::write(&path, &raw).unwrap();

    let template = HeaderTemplate::load(&path, "FILENAME").unwrap();
    assert_eq!(template.render("Foo.cs"), b"// (c) Soci\xe9t\xe9 Foo.cs\n");
  }

  #[test]
  fn test_load_template() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("copyright.template");
    fs::write(&path, "// <copyright file=\"FILENAME\" company=\"ACME\">\n").unwrap();

    let template = HeaderTemplate::load(&path, "FILENAME").unwrap();
    assert_eq!(template.placeholder(), "FILENAME");
    assert_eq!(template.text(), b"// <copyright file=\"FILENAME\" company=\"ACME\">\n");
  }

  #[test]
  fn test_load_missing_template() {
    let temp_dir = tempdir().unwrap();
    let err = HeaderTemplate::load(&temp_dir.path().join("missing.template"), "FILENAME").unwrap_err();
    assert!(err.to_string().contains("Failed to read header template"));
  }
}
