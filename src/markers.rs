//! # Markers Module
//!
//! The extension to marker table. A marker is the substring whose first
//! occurrence in a file marks where the original content begins; the license
//! header is spliced in right before it and anything preceding it is dropped.

use std::path::Path;

/// Built-in table entries, in lookup order.
pub const DEFAULT_MARKERS: &[(&str, &str)] = &[(".hpp", "#ifndef"), (".cpp", "#include")];

/// Immutable, ordered mapping from a file extension (with its leading dot) to
/// the marker that identifies the start of the original content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTable {
  entries: Vec<(String, String)>,
}

impl Default for MarkerTable {
  fn default() -> Self {
    Self::new(DEFAULT_MARKERS.iter().copied())
  }
}

impl MarkerTable {
  /// Builds a table from `(extension, marker)` pairs.
  ///
  /// Later duplicates of an extension are ignored so the first entry wins.
  pub fn new<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
    let mut entries: Vec<(String, String)> = Vec::new();
    for (ext, marker) in pairs {
      if entries.iter().any(|(existing, _)| existing == ext) {
        continue;
      }
      entries.push((ext.to_string(), marker.to_string()));
    }
    Self { entries }
  }

  /// Returns the marker registered for `extension` (e.g. `".cpp"`).
  ///
  /// Matching is exact and case-sensitive: `.CPP` is not `.cpp`.
  pub fn marker_for_extension(&self, extension: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|(ext, _)| ext == extension)
      .map(|(_, marker)| marker.as_str())
  }

  /// Resolves the marker for a path by its extension.
  pub fn marker_for_path(&self, path: &Path) -> Option<&str> {
    dotted_extension(path).and_then(|ext| self.marker_for_extension(&ext))
  }

  /// Iterates over `(extension, marker)` pairs in table order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(ext, marker)| (ext.as_str(), marker.as_str()))
  }
}

/// Returns the extension of `path` including the leading dot.
///
/// Dotfiles like `.cpp` have no extension, matching [`Path::extension`].
pub fn dotted_extension(path: &Path) -> Option<String> {
  path.extension().map(|ext| format!(".{}", ext.to_string_lossy()))
}
