//! # Diff Module
//!
//! Renders the change a stamp would make, for `--check --show-diff`.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Manages diff creation and rendering for header changes.
#[derive(Debug, Clone, Default)]
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,
}

impl DiffManager {
  pub const fn new(show_diff: bool) -> Self {
    Self { show_diff }
  }

  /// Renders a line diff between `original` and `new` as plain text.
  ///
  /// The first line names the file. Each following line is prefixed with
  /// `+`, `-` or a space.
  pub fn render_diff(&self, path: &Path, original: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(original, new);

    let mut rendered = format!("Diff for {}:\n", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      rendered.push_str(sign);
      rendered.push_str(change.value());
      if change.missing_newline() {
        rendered.push('\n');
      }
    }

    rendered
  }

  /// Prints the diff to stderr if `show_diff` is enabled.
  ///
  /// Inserted lines are green and removed lines red when stderr supports
  /// colour.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) {
    if !self.show_diff {
      return;
    }

    for line in self.render_diff(path, original, new).lines() {
      if line.starts_with('+') {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.green()));
      } else if line.starts_with('-') {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.red()));
      } else {
        eprintln!("{}", line);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_render_diff_shows_inserted_header() {
    let manager = DiffManager::new(false);
    let rendered = manager.render_diff(
      Path::new("./Foo.cs"),
      "class Foo {}\n",
      "// copyright Foo.cs\nclass Foo {}\n",
    );

    assert_eq!(rendered, "Diff for ./Foo.cs:\n+// copyright Foo.cs\n class Foo {}\n");
  }

  #[test]
  fn test_render_diff_without_trailing_newline() {
    let manager = DiffManager::new(false);
    let rendered = manager.render_diff(Path::new("./Foo.cs"), "class Foo {}", "// h\nclass Foo {}");

    assert!(rendered.contains("+// h\n"));
    assert!(rendered.ends_with(" class Foo {}\n"));
  }
}
