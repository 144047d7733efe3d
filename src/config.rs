//! Export configuration.
//!
//! Every section and field has a default, so an empty document is a valid
//! configuration: asset catalog on, namespace grouping off, no Swift output.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::catalog::{ColorSpace, DuplicatePolicy};
use crate::error::Result;
use crate::style::{MetricsTable, PartialAttributeSet};

/// Top-level configuration of an export run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub colors: ColorsConfig,
    pub typography: TypographyConfig,
    pub naming: NamingConfig,
    /// Directory with template overrides, searched before the built-ins.
    pub templates_dir: Option<PathBuf>,
}

/// Color outputs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Write an asset catalog and reference it from generated code.
    pub use_asset_catalog: bool,
    /// Turn `/` in token names into nested catalog folders.
    pub group_using_namespace: bool,
    /// Generated code loads catalog colors from `Bundle.module`.
    pub assets_in_swift_package: bool,
    /// Generated code loads catalog colors from `Bundle.main`.
    pub assets_in_main_bundle: bool,
    pub color_space: ColorSpace,
    pub duplicates: DuplicatePolicy,
    /// Catalog directory, relative to the output root.
    pub catalog_path: PathBuf,
    /// UIKit `UIColor` extension.
    pub swift_path: Option<PathBuf>,
    /// SwiftUI `Color` extension.
    pub swiftui_path: Option<PathBuf>,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            use_asset_catalog: true,
            group_using_namespace: false,
            assets_in_swift_package: false,
            assets_in_main_bundle: false,
            color_space: ColorSpace::default(),
            duplicates: DuplicatePolicy::default(),
            catalog_path: PathBuf::from("Assets.xcassets/Colors"),
            swift_path: None,
            swiftui_path: None,
        }
    }
}

impl ColorsConfig {
    /// The Swift expression for the bundle holding the catalog.
    pub fn bundle_expression(&self) -> &'static str {
        if self.assets_in_swift_package {
            "Bundle.module"
        } else if self.assets_in_main_bundle {
            "Bundle.main"
        } else {
            "BundleProvider.bundle"
        }
    }

    /// True when nothing at all would be written for colors.
    pub fn has_targets(&self) -> bool {
        self.use_asset_catalog || self.swift_path.is_some() || self.swiftui_path.is_some()
    }
}

/// Text-style outputs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypographyConfig {
    /// `UIFont` extension with one factory per style.
    pub font_extension_path: Option<PathBuf>,
    /// `TextStyle` definitions carrying the resolved attributes.
    pub styles_path: Option<PathBuf>,
    /// Attributes used when neither an override nor the token sets them.
    pub defaults: Option<PartialAttributeSet>,
    /// Line height per point of font families, added to the built-in table.
    pub metrics: BTreeMap<String, f64>,
}

impl TypographyConfig {
    pub fn has_targets(&self) -> bool {
        self.font_extension_path.is_some() || self.styles_path.is_some()
    }

    /// The built-in Apple metrics extended with the configured families.
    pub fn metrics_table(&self) -> MetricsTable {
        self.metrics
            .iter()
            .fold(MetricsTable::apple(), |table, (family, ratio)| {
                table.family(family, *ratio)
            })
    }
}

/// Identifier naming in generated code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub add_platform_prefix: bool,
    pub prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            add_platform_prefix: false,
            prefix: "ds".to_string(),
        }
    }
}

impl NamingConfig {
    /// The prefix to apply, if prefixing is enabled.
    pub fn active_prefix(&self) -> Option<&str> {
        if self.add_platform_prefix && !self.prefix.is_empty() {
            Some(&self.prefix)
        } else {
            None
        }
    }
}

impl ExportConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a configuration file, choosing YAML or JSON by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!("loading config from {}", path.display());
        if crate::util::is_yaml_path(path) {
            Self::from_yaml_str(&source)
        } else {
            Self::from_json_str(&source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontMetrics;
    use crate::token::LineBreakMode;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = ExportConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ExportConfig::default());
        assert!(config.colors.use_asset_catalog);
        assert!(!config.colors.group_using_namespace);
        assert!(!config.typography.has_targets());
    }

    #[test]
    fn test_full_yaml() {
        let config = ExportConfig::from_yaml_str(
            r#"
colors:
  use_asset_catalog: true
  group_using_namespace: true
  assets_in_swift_package: true
  color_space: display-p3
  duplicates: last-write-wins
  swift_path: Sources/Color.swift
typography:
  styles_path: Sources/TextStyle.swift
  defaults:
    line_break_mode: byTruncatingTail
naming:
  add_platform_prefix: true
  prefix: acme
"#,
        )
        .unwrap();
        assert!(config.colors.group_using_namespace);
        assert_eq!(config.colors.color_space, ColorSpace::DisplayP3);
        assert_eq!(config.colors.duplicates, DuplicatePolicy::LastWriteWins);
        assert_eq!(config.colors.bundle_expression(), "Bundle.module");
        assert_eq!(
            config.typography.defaults.unwrap().line_break_mode,
            Some(LineBreakMode::ByTruncatingTail)
        );
        assert_eq!(config.naming.active_prefix(), Some("acme"));
    }

    #[test]
    fn test_json_config() {
        let config =
            ExportConfig::from_json_str(r#"{"colors": {"use_asset_catalog": false}}"#).unwrap();
        assert!(!config.colors.use_asset_catalog);
        assert!(!config.colors.has_targets());
    }

    #[test]
    fn test_bundle_expression_precedence() {
        let mut colors = ColorsConfig::default();
        assert_eq!(colors.bundle_expression(), "BundleProvider.bundle");
        colors.assets_in_main_bundle = true;
        assert_eq!(colors.bundle_expression(), "Bundle.main");
        colors.assets_in_swift_package = true;
        assert_eq!(colors.bundle_expression(), "Bundle.module");
    }

    #[test]
    fn test_configured_metrics_extend_table() {
        let config = ExportConfig::from_yaml_str(
            "typography:\n  metrics:\n    Inter: 1.25\n    Helvetica: 1.5\n",
        )
        .unwrap();
        let table = config.typography.metrics_table();
        assert_eq!(table.line_height("Inter", 16.0), Some(20.0));
        assert_eq!(table.line_height("Inter-Bold", 16.0), Some(20.0));
        // configured entries replace built-in ones
        assert_eq!(table.line_height("Helvetica", 10.0), Some(15.0));
    }

    #[test]
    fn test_prefix_disabled_by_default() {
        assert_eq!(NamingConfig::default().active_prefix(), None);
    }

    #[test]
    fn test_unknown_color_space_is_error() {
        assert!(ExportConfig::from_yaml_str("colors:\n  color_space: cmyk\n").is_err());
    }
}
