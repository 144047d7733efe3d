//! `Contents.json` documents of an asset catalog.
//!
//! These are plain serde models; field declaration order matches the
//! alphabetical order Xcode itself writes.

use serde::{Deserialize, Serialize};

use super::encode::HexComponents;

/// Color space recorded in each colorset descriptor.
///
/// Hex components are the same for every space; only the tag differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSpace {
    #[default]
    Srgb,
    DisplayP3,
    ExtendedSrgb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    pub author: &'static str,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode",
            version: 1,
        }
    }
}

/// Marker at the root of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RootContents {
    pub info: Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderProperties {
    #[serde(rename = "provides-namespace")]
    pub provides_namespace: bool,
}

/// Marker of a namespace folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderContents {
    pub info: Info,
    pub properties: FolderProperties,
}

impl Default for FolderContents {
    fn default() -> Self {
        Self {
            info: Info::default(),
            properties: FolderProperties {
                provides_namespace: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppearanceTag {
    pub appearance: &'static str,
    pub value: &'static str,
}

impl AppearanceTag {
    pub fn dark() -> Self {
        Self {
            appearance: "luminosity",
            value: "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    #[serde(rename = "color-space")]
    pub color_space: ColorSpace,
    pub components: HexComponents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorsetColor {
    /// Empty for the default appearance, in which case the key is omitted
    /// the way Xcode writes it rather than emitted as `[]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub appearances: Vec<AppearanceTag>,
    pub color: ColorValue,
    pub idiom: &'static str,
}

/// Descriptor of a single `.colorset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorsetContents {
    pub colors: Vec<ColorsetColor>,
    pub info: Info,
}
