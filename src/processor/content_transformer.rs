//! # Content Transformer Module
//!
//! Builds the stamped content of a file from the rendered header and the
//! original bytes.

use crate::templates::HeaderTemplate;

/// Prepends rendered headers to file content.
///
/// The result is the rendered template immediately followed by the original
/// bytes. No separator is added; any blank line between header and code must
/// come from the template itself.
pub struct ContentTransformer {
  template: HeaderTemplate,
}

impl ContentTransformer {
  pub const fn new(template: HeaderTemplate) -> Self {
    Self { template }
  }

  /// Returns the header rendered for `file_name`.
  pub fn header_for(&self, file_name: &str) -> Vec<u8> {
    self.template.render(file_name)
  }

  /// Returns `header_for(file_name)` followed by `content`.
  pub fn prepend_header(&self, file_name: &str, content: &[u8]) -> Vec<u8> {
    let header = self.header_for(file_name);

    let mut stamped = Vec::with_capacity(header.len() + content.len());
    stamped.extend_from_slice(&header);
    stamped.extend_from_slice(content);
    stamped
  }
}
