//! Project version lookup
//!
//! The version lives in the project file as the text of the first `<Version>`
//! element, wherever it sits in the tree. It is returned verbatim: no trimming,
//! no semver parsing, and never a placeholder when it is missing.

use crate::core::error::{BundleResult, MetadataError};
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

/// Element holding the version text
pub const VERSION_TAG: &str = "Version";

/// Read the project version from the metadata document at `path`
pub fn get_project_version(path: &Path) -> BundleResult<String> {
  let raw = fs::read_to_string(path).map_err(|e| MetadataError::Unreadable {
    path: path.to_path_buf(),
    reason: e.to_string(),
  })?;

  // Visual Studio writes .csproj files with a BOM
  let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

  let doc = Document::parse(text).map_err(|e| MetadataError::Parse {
    path: path.to_path_buf(),
    reason: e.to_string(),
  })?;

  let element = find_first_descendant(doc.root(), VERSION_TAG).ok_or_else(|| MetadataError::MissingElement {
    path: path.to_path_buf(),
  })?;

  leading_text(element).ok_or_else(|| {
    MetadataError::MalformedContent {
      path: path.to_path_buf(),
    }
    .into()
  })
}

/// First element below `node` (document order) named `tag` with no namespace
///
/// Legacy project files declare the MSBuild namespace on `<Project>`; their
/// `<Version>` is namespaced and does not match.
pub fn find_first_descendant<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
  node
    .descendants()
    .find(|n| n.is_element() && n.tag_name().namespace().is_none() && n.tag_name().name() == tag)
}

/// Text before the element's first child element
///
/// Comments and processing instructions are skipped, so
/// `<Version><!-- ci -->1.0</Version>` yields `1.0`. `None` when there is no
/// text node at all.
fn leading_text(element: Node<'_, '_>) -> Option<String> {
  let mut text: Option<String> = None;
  for child in element.children().take_while(|c| !c.is_element()) {
    if let Some(part) = child.text().filter(|_| child.is_text()) {
      text.get_or_insert_with(String::new).push_str(part);
    }
  }
  text
}
