//! Utility functions for cross-platform path handling

use std::path::{Component, Path};

/// Convert a relative path to a zip entry name (always forward slashes)
///
/// Zip readers expect `/` separators, even for archives built on Windows.
/// Directory entries additionally end with a trailing `/`.
pub fn archive_entry_name(relative: &Path, is_dir: bool) -> String {
  let mut name = relative
    .components()
    .filter_map(|c| match c {
      Component::Normal(part) => Some(part.to_string_lossy()),
      _ => None,
    })
    .collect::<Vec<_>>()
    .join("/");

  if is_dir {
    name.push('/');
  }
  name
}
