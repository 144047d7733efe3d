//! Assembly of a color asset catalog from color pairs.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use super::contents::{
    AppearanceTag, ColorSpace, ColorValue, ColorsetColor, ColorsetContents, FolderContents, Info,
    RootContents,
};
use super::encode::{to_hex, HexComponents};
use super::namespace::{resolve_namespace, NamespacePath};
use crate::error::{Error, Result};
use crate::token::{Color, ColorPair};

/// Directory suffix of a single color inside the catalog.
pub const COLORSET_EXTENSION: &str = "colorset";

/// Name of the descriptor file in every catalog directory.
pub const CONTENTS_FILE: &str = "Contents.json";

/// The appearance a color variant applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// Unconditional variant, used in light mode and as the fallback.
    Any,
    Dark,
}

/// What to do when two tokens resolve to the same catalog location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail the build with [`Error::DuplicateColor`].
    #[default]
    Reject,
    /// Keep the later token, in the position of the earlier one.
    LastWriteWins,
}

/// One appearance of a color, hex-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorVariant {
    pub appearance: Appearance,
    pub components: HexComponents,
}

impl ColorVariant {
    fn new(appearance: Appearance, color: &Color) -> Self {
        Self {
            appearance,
            components: to_hex(color),
        }
    }

    /// Appearance tags as written into the descriptor; empty for [`Appearance::Any`].
    pub fn appearance_tags(&self) -> Vec<AppearanceTag> {
        match self.appearance {
            Appearance::Any => Vec::new(),
            Appearance::Dark => vec![AppearanceTag::dark()],
        }
    }
}

/// A single `.colorset` in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCatalogEntry {
    /// Token name, used for emitted identifiers.
    pub name: String,
    pub directory_path: Vec<String>,
    pub leaf_name: String,
    pub variants: Vec<ColorVariant>,
}

impl ColorCatalogEntry {
    /// Path of the `.colorset` directory relative to the catalog root.
    pub fn colorset_dir(&self) -> PathBuf {
        let mut path: PathBuf = self.directory_path.iter().collect();
        path.push(format!("{}.{}", self.leaf_name, COLORSET_EXTENSION));
        path
    }

    pub fn has_dark(&self) -> bool {
        self.variants.iter().any(|v| v.appearance == Appearance::Dark)
    }

    /// Builds the colorset descriptor in the given color space.
    pub fn contents(&self, color_space: ColorSpace) -> ColorsetContents {
        ColorsetContents {
            colors: self
                .variants
                .iter()
                .map(|variant| ColorsetColor {
                    appearances: variant.appearance_tags(),
                    color: ColorValue {
                        color_space,
                        components: variant.components.clone(),
                    },
                    idiom: "universal",
                })
                .collect(),
            info: Info::default(),
        }
    }
}

/// Marker file of one namespace folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryMarker {
    pub path: Vec<String>,
}

impl DirectoryMarker {
    pub fn dir(&self) -> PathBuf {
        self.path.iter().collect()
    }

    pub fn contents(&self) -> FolderContents {
        FolderContents::default()
    }
}

/// Marker file at the root of the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootMarker;

impl RootMarker {
    pub fn contents(&self) -> RootContents {
        RootContents::default()
    }
}

/// The structural result of a catalog build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCatalog {
    pub root: RootMarker,
    /// One entry per color, in input order.
    pub entries: Vec<ColorCatalogEntry>,
    /// One marker per distinct namespace folder, in order of first use.
    pub directories: Vec<DirectoryMarker>,
}

/// Builds a [`ColorCatalog`] from color pairs.
///
/// # Example
///
/// ```rust
/// use tokenport::catalog::CatalogBuilder;
/// use tokenport::token::{Color, ColorPair, Rgba};
///
/// let light = Color::new("brand", "ui/brand", Rgba::new(1.0, 0.0, 0.0, 1.0)).unwrap();
/// let dark = Color::new("brand", "ui/brand", Rgba::new(0.5, 0.0, 0.0, 1.0)).unwrap();
/// let pair = ColorPair::new(light, Some(dark)).unwrap();
///
/// let catalog = CatalogBuilder::new(true).build(&[pair]).unwrap();
/// assert_eq!(catalog.directories.len(), 1);
/// assert_eq!(catalog.entries[0].variants.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogBuilder {
    group_by_namespace: bool,
    duplicates: DuplicatePolicy,
}

impl CatalogBuilder {
    pub fn new(group_by_namespace: bool) -> Self {
        Self {
            group_by_namespace,
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Sets how colliding catalog locations are handled.
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Resolves and encodes every pair.
    ///
    /// Fails on the first malformed name or rejected duplicate; no partial
    /// catalog is returned.
    pub fn build(&self, pairs: &[ColorPair]) -> Result<ColorCatalog> {
        let mut entries: Vec<ColorCatalogEntry> = Vec::with_capacity(pairs.len());
        let mut positions: HashMap<NamespacePath, usize> = HashMap::new();
        let mut seen_dirs: HashSet<Vec<String>> = HashSet::new();
        let mut directories = Vec::new();

        for pair in pairs {
            let path = resolve_namespace(pair.name(), pair.original_name(), self.group_by_namespace)?;

            for prefix in path.prefixes() {
                if seen_dirs.insert(prefix.to_vec()) {
                    directories.push(DirectoryMarker {
                        path: prefix.to_vec(),
                    });
                }
            }

            let mut variants = vec![ColorVariant::new(Appearance::Any, pair.light())];
            if let Some(dark) = pair.dark() {
                variants.push(ColorVariant::new(Appearance::Dark, dark));
            }

            let entry = ColorCatalogEntry {
                name: pair.name().to_string(),
                directory_path: path.directory_path.clone(),
                leaf_name: path.leaf_name.clone(),
                variants,
            };
            tracing::debug!(
                "color '{}' -> {}",
                pair.original_name(),
                entry.colorset_dir().display()
            );

            match positions.get(&path).copied() {
                Some(index) => match self.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(Error::DuplicateColor {
                            path: path.display_path(),
                        });
                    }
                    DuplicatePolicy::LastWriteWins => {
                        tracing::warn!(
                            "color '{}' replaces an earlier color at {}",
                            pair.original_name(),
                            path.display_path()
                        );
                        entries[index] = entry;
                    }
                },
                None => {
                    positions.insert(path, entries.len());
                    entries.push(entry);
                }
            }
        }

        tracing::info!(
            "Color catalog built: {} colors, {} folders",
            entries.len(),
            directories.len()
        );

        Ok(ColorCatalog {
            root: RootMarker,
            entries,
            directories,
        })
    }
}
