//! Resolution of hierarchical token names into catalog locations.

use crate::error::{Error, Result};
use crate::util::sanitize_segment;

/// Separator between namespace levels in a token's original name.
pub const NAMESPACE_SEPARATOR: char = '/';

/// Where a color lands inside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacePath {
    /// Folder names from the catalog root down to the colorset's parent.
    pub directory_path: Vec<String>,
    /// Name of the colorset itself.
    pub leaf_name: String,
}

impl NamespacePath {
    /// Every directory level on the way to the leaf.
    ///
    /// For `a/b/c` this yields `["a"]` then `["a", "b"]`.
    pub fn prefixes(&self) -> impl Iterator<Item = &[String]> {
        (1..=self.directory_path.len()).map(move |n| &self.directory_path[..n])
    }

    /// The `/`-joined location of the leaf, used for duplicate detection.
    pub fn display_path(&self) -> String {
        let mut parts: Vec<&str> = self.directory_path.iter().map(String::as_str).collect();
        parts.push(&self.leaf_name);
        parts.join("/")
    }
}

/// Resolves a token into its catalog location.
///
/// With grouping disabled the color sits at the catalog root under `name`.
/// With grouping enabled `original_name` is split on `/`: every segment but
/// the last becomes a sanitized folder, the last becomes the leaf.
///
/// # Errors
///
/// - [`Error::EmptyLeaf`] if the last segment is empty (e.g. `"ui/"`)
/// - [`Error::EmptySegment`] if a folder segment is empty (e.g. `"ui//x"`)
/// - [`Error::InvalidSegment`] if a segment is only dots (`"."`, `".."`),
///   which would name the current or parent directory
///
/// # Example
///
/// ```rust
/// use tokenport::catalog::resolve_namespace;
///
/// let path = resolve_namespace("brand", "ui/colors/brand", true).unwrap();
/// assert_eq!(path.directory_path, vec!["ui", "colors"]);
/// assert_eq!(path.leaf_name, "brand");
/// ```
pub fn resolve_namespace(
    name: &str,
    original_name: &str,
    group_by_namespace: bool,
) -> Result<NamespacePath> {
    if !group_by_namespace {
        return Ok(NamespacePath {
            directory_path: Vec::new(),
            leaf_name: leaf_segment(name, original_name)?,
        });
    }

    let mut segments: Vec<&str> = original_name.split(NAMESPACE_SEPARATOR).collect();
    // split always yields at least one element
    let leaf = segments.pop().unwrap_or_default();
    let leaf_name = leaf_segment(leaf, original_name)?;

    let directory_path = segments
        .into_iter()
        .map(|segment| {
            let folder = sanitize_segment(segment);
            if folder.is_empty() {
                return Err(Error::EmptySegment {
                    original_name: original_name.to_string(),
                });
            }
            reject_dots(folder, original_name)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(NamespacePath {
        directory_path,
        leaf_name,
    })
}

fn leaf_segment(raw: &str, original_name: &str) -> Result<String> {
    let leaf = sanitize_segment(raw);
    if leaf.is_empty() {
        return Err(Error::EmptyLeaf {
            original_name: original_name.to_string(),
        });
    }
    reject_dots(leaf, original_name)
}

fn reject_dots(segment: String, original_name: &str) -> Result<String> {
    if segment.chars().all(|c| c == '.') {
        Err(Error::InvalidSegment {
            original_name: original_name.to_string(),
            segment,
        })
    } else {
        Ok(segment)
    }
}
