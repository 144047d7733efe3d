//! Data handed to the Swift templates.

use serde::Serialize;

use crate::catalog::{to_decimal, DecimalComponents, NamespacePath, NAMESPACE_SEPARATOR};
use crate::style::{RegisteredStyle, StyleAttributeSet};
use crate::token::ColorPair;

/// One color as seen by the color templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorContext {
    pub name: String,
    /// Catalog lookup name, including namespace folders (`ui/brand`).
    pub asset_name: String,
    pub light: DecimalComponents,
    pub dark: Option<DecimalComponents>,
}

impl ColorContext {
    pub fn new(pair: &ColorPair, path: &NamespacePath) -> Self {
        let mut asset_name = path.directory_path.join(&NAMESPACE_SEPARATOR.to_string());
        if !asset_name.is_empty() {
            asset_name.push(NAMESPACE_SEPARATOR);
        }
        asset_name.push_str(&path.leaf_name);

        Self {
            name: pair.name().to_string(),
            asset_name,
            light: to_decimal(pair.light()),
            dark: pair.dark().map(to_decimal),
        }
    }
}

/// Context of `Color.swift` and `Color+SwiftUI.swift`.
#[derive(Debug, Clone, Serialize)]
pub struct ColorsContext {
    pub use_asset_catalog: bool,
    /// Swift expression of the bundle holding the catalog.
    pub bundle: &'static str,
    pub colors: Vec<ColorContext>,
}

/// One text style as seen by the typography templates.
#[derive(Debug, Clone, Serialize)]
pub struct StyleContext {
    pub name: String,
    #[serde(flatten)]
    pub attributes: StyleAttributeSet,
}

impl From<&RegisteredStyle> for StyleContext {
    fn from(entry: &RegisteredStyle) -> Self {
        Self {
            name: entry.style.name.clone(),
            attributes: entry.attributes.clone(),
        }
    }
}

/// Context of `UIFont+extension.swift` and `TextStyle.swift`.
#[derive(Debug, Clone, Serialize)]
pub struct TypographyContext {
    pub styles: Vec<StyleContext>,
}
