#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// StyleCop-style header whose first lines contain the default marker.
pub const STYLECOP_TEMPLATE: &str = "//-----------------------------------------------------------------------
// <copyright file=\"FILENAME\" company=\"ACME\">
//   Licensed under the GPL.
// </copyright>
//-----------------------------------------------------------------------

";

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Reads `root/relative` as a string.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  let path = root.join(relative);
  fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Builds a small C#-style tree with every kind of exclusion.
///
/// ```text
/// Program.cs
/// Form1.Designer.cs
/// notes.txt
/// Core/Service.cs
/// Core/Stamped.cs        (already carries the marker)
/// Extras/Bar.cs
/// .git/hooks/Hook.cs
/// ```
pub fn create_sample_tree(root: &Path) -> Result<()> {
  write_file(root, "Program.cs", "class Program {}\n")?;
  write_file(root, "Form1.Designer.cs", "partial class Form1 {}\n")?;
  write_file(root, "notes.txt", "plain text\n")?;
  write_file(root, "Core/Service.cs", "namespace Core {\n  class Service {}\n}\n")?;
  write_file(
    root,
    "Core/Stamped.cs",
    "// <copyright file=\"Stamped.cs\" company=\"ACME\">\nclass Stamped {}\n",
  )?;
  write_file(root, "Extras/Bar.cs", "class Bar {}\n")?;
  write_file(root, ".git/hooks/Hook.cs", "class Hook {}\n")?;
  Ok(())
}
