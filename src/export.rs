//! Export of tokens into catalog files and Swift sources.
//!
//! [`Exporter`] computes every output in memory and returns it as a list of
//! [`OutputFile`]s with paths relative to the output root. Nothing touches
//! the filesystem until [`write_output`] is called, so a failed export never
//! leaves a half-written catalog behind.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::catalog::{
    resolve_namespace, CatalogBuilder, DuplicatePolicy, NamespacePath, CONTENTS_FILE,
};
use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::render::{
    encode_json, identifier, templates, ColorContext, ColorsContext, Emitter, StyleContext,
    TemplateRegistry, TypographyContext,
};
use crate::style::{FontMetrics, StyleRegistry, StyleResolver};
use crate::token::{ColorPair, TextStyle};

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the output root.
    pub path: PathBuf,
    pub contents: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

/// Turns token lists into output files according to an [`ExportConfig`].
///
/// # Example
///
/// ```rust
/// use tokenport::{ExportConfig, Exporter};
/// use tokenport::token::{Color, ColorPair, Rgba};
///
/// let color = Color::new("brand", "brand", Rgba::new(1.0, 0.0, 0.0, 1.0)).unwrap();
/// let exporter = Exporter::new(ExportConfig::default()).unwrap();
///
/// let files = exporter.export_colors(&[ColorPair::light_only(color)]).unwrap();
/// assert!(files
///     .iter()
///     .any(|f| f.path.ends_with("brand.colorset/Contents.json")));
/// ```
pub struct Exporter {
    config: ExportConfig,
    emitter: Emitter,
}

impl Exporter {
    /// Compiles the templates named by `config`.
    ///
    /// # Errors
    ///
    /// Fails if the template override directory cannot be read or a template
    /// does not compile.
    pub fn new(config: ExportConfig) -> Result<Self> {
        let mut registry = TemplateRegistry::with_builtins();
        if let Some(dir) = &config.templates_dir {
            let count = registry.add_override_dir(dir)?;
            tracing::info!("{} template overrides loaded from {}", count, dir.display());
        }
        let emitter = Emitter::new(&registry, &config.naming)?;
        Ok(Self { config, emitter })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Builds the color catalog and the color extensions.
    ///
    /// The catalog is always assembled, so malformed names and rejected
    /// duplicates fail the export even when no catalog is written.
    pub fn export_colors(&self, pairs: &[ColorPair]) -> Result<Vec<OutputFile>> {
        let colors = &self.config.colors;
        if !colors.has_targets() {
            tracing::debug!("no color outputs configured");
            return Ok(Vec::new());
        }

        let catalog = CatalogBuilder::new(colors.group_using_namespace)
            .with_duplicates(colors.duplicates)
            .build(pairs)?;

        let mut files = Vec::new();
        if colors.use_asset_catalog {
            let root = &colors.catalog_path;
            files.push(OutputFile::new(
                root.join(CONTENTS_FILE),
                encode_json(&catalog.root.contents())?,
            ));
            for marker in &catalog.directories {
                files.push(OutputFile::new(
                    root.join(marker.dir()).join(CONTENTS_FILE),
                    encode_json(&marker.contents())?,
                ));
            }
            for entry in &catalog.entries {
                files.push(OutputFile::new(
                    root.join(entry.colorset_dir()).join(CONTENTS_FILE),
                    encode_json(&entry.contents(colors.color_space))?,
                ));
            }
        }

        if colors.swift_path.is_none() && colors.swiftui_path.is_none() {
            return Ok(files);
        }

        let context = ColorsContext {
            use_asset_catalog: colors.use_asset_catalog,
            bundle: colors.bundle_expression(),
            colors: self.color_contexts(pairs)?,
        };
        if let Some(path) = &colors.swift_path {
            files.push(OutputFile::new(
                path,
                self.emitter.render(templates::COLOR_SWIFT, &context)?,
            ));
        }
        if let Some(path) = &colors.swiftui_path {
            files.push(OutputFile::new(
                path,
                self.emitter.render(templates::COLOR_SWIFTUI, &context)?,
            ));
        }
        Ok(files)
    }

    // Two colors clash when they share a catalog location or a Swift member
    // name. Location clashes were already settled by the catalog builder;
    // name clashes follow the same duplicate policy here.
    fn color_contexts(&self, pairs: &[ColorPair]) -> Result<Vec<ColorContext>> {
        let colors = &self.config.colors;
        let prefix = self.config.naming.active_prefix();
        let mut contexts: Vec<ColorContext> = Vec::with_capacity(pairs.len());
        let mut keys: Vec<(NamespacePath, String)> = Vec::with_capacity(pairs.len());
        let mut paths: HashMap<NamespacePath, usize> = HashMap::new();
        let mut identifiers: HashMap<String, usize> = HashMap::new();

        for pair in pairs {
            let path = resolve_namespace(pair.name(), pair.original_name(), colors.group_using_namespace)?;
            let ident = identifier(pair.name(), prefix);

            let slot = match (paths.get(&path).copied(), identifiers.get(&ident).copied()) {
                (Some(at_path), Some(at_ident)) if at_path != at_ident => {
                    return Err(Error::DuplicateIdentifier {
                        identifier: ident,
                        first: contexts[at_ident].name.clone(),
                        second: pair.name().to_string(),
                    });
                }
                (Some(index), _) => Some(index),
                (None, Some(index)) => match colors.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(Error::DuplicateIdentifier {
                            identifier: ident,
                            first: contexts[index].name.clone(),
                            second: pair.name().to_string(),
                        });
                    }
                    DuplicatePolicy::LastWriteWins => {
                        tracing::warn!(
                            "color '{}' replaces '{}' as Swift member '{}'",
                            pair.original_name(),
                            contexts[index].name,
                            ident
                        );
                        Some(index)
                    }
                },
                (None, None) => None,
            };

            let context = ColorContext::new(pair, &path);
            match slot {
                Some(index) => {
                    let (old_path, old_ident) =
                        std::mem::replace(&mut keys[index], (path.clone(), ident.clone()));
                    paths.remove(&old_path);
                    identifiers.remove(&old_ident);
                    paths.insert(path, index);
                    identifiers.insert(ident, index);
                    contexts[index] = context;
                }
                None => {
                    paths.insert(path.clone(), contexts.len());
                    identifiers.insert(ident.clone(), contexts.len());
                    keys.push((path, ident));
                    contexts.push(context);
                }
            }
        }
        Ok(contexts)
    }

    /// Resolves every text style and renders the typography sources.
    pub fn export_text_styles<M: FontMetrics + Clone>(
        &self,
        styles: &[TextStyle],
        resolver: &StyleResolver<M>,
    ) -> Result<Vec<OutputFile>> {
        let typography = &self.config.typography;
        if !typography.has_targets() {
            tracing::debug!("no typography outputs configured");
            return Ok(Vec::new());
        }

        let registry = StyleRegistry::build(styles, resolver.clone(), typography.defaults.clone())?;
        check_style_identifiers(&registry, self.config.naming.active_prefix())?;
        let context = TypographyContext {
            styles: registry.iter().map(StyleContext::from).collect(),
        };

        let mut files = Vec::new();
        if let Some(path) = &typography.font_extension_path {
            files.push(OutputFile::new(
                path,
                self.emitter.render(templates::FONT_EXTENSION, &context)?,
            ));
        }
        if let Some(path) = &typography.styles_path {
            files.push(OutputFile::new(
                path,
                self.emitter.render(templates::TEXT_STYLES, &context)?,
            ));
        }
        Ok(files)
    }
}

/// Fails when two style names generate the same Swift member name.
fn check_style_identifiers<M: FontMetrics>(
    registry: &StyleRegistry<M>,
    prefix: Option<&str>,
) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in registry.names() {
        let ident = identifier(name, prefix);
        if let Some(first) = seen.get(&ident) {
            return Err(Error::DuplicateIdentifier {
                identifier: ident,
                first: first.to_string(),
                second: name.to_string(),
            });
        }
        seen.insert(ident, name);
    }
    Ok(())
}

/// Writes generated files below `root`, creating directories as needed.
pub fn write_output(root: impl AsRef<Path>, files: &[OutputFile]) -> Result<()> {
    let root = root.as_ref();
    for file in files {
        let target = root.join(&file.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, &file.contents)?;
        tracing::debug!("wrote {}", target.display());
    }
    tracing::info!("{} files written to {}", files.len(), root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::MetricsTable;
    use crate::token::{Color, Rgba, TextCase};

    fn pair(name: &str, original: &str, red: f64) -> ColorPair {
        ColorPair::light_only(Color::new(name, original, Rgba::new(red, 0.0, 0.0, 1.0)).unwrap())
    }

    fn find<'a>(files: &'a [OutputFile], suffix: &str) -> Option<&'a OutputFile> {
        files.iter().find(|f| f.path.ends_with(suffix))
    }

    #[test]
    fn test_default_config_writes_catalog_only() {
        let exporter = Exporter::new(ExportConfig::default()).unwrap();
        let files = exporter.export_colors(&[pair("brand", "brand", 1.0)]).unwrap();

        let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("Assets.xcassets/Colors/Contents.json"),
                PathBuf::from("Assets.xcassets/Colors/brand.colorset/Contents.json"),
            ]
        );
    }

    #[test]
    fn test_no_targets_no_files() {
        let mut config = ExportConfig::default();
        config.colors.use_asset_catalog = false;
        let exporter = Exporter::new(config).unwrap();

        assert!(exporter.export_colors(&[pair("a", "a", 1.0)]).unwrap().is_empty());
        let styles = vec![TextStyle::new("body", "Helvetica", 14.0).unwrap()];
        assert!(exporter
            .export_text_styles(&styles, &StyleResolver::new(MetricsTable::apple()))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_duplicate_rejected_without_catalog() {
        let mut config = ExportConfig::default();
        config.colors.use_asset_catalog = false;
        config.colors.swift_path = Some(PathBuf::from("Color.swift"));
        let exporter = Exporter::new(config).unwrap();

        let err = exporter
            .export_colors(&[pair("a", "a", 1.0), pair("a", "a", 0.5)])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateColor { .. }));
    }

    #[test]
    fn test_last_write_wins_in_swift_source() {
        let mut config = ExportConfig::default();
        config.colors.use_asset_catalog = false;
        config.colors.duplicates = DuplicatePolicy::LastWriteWins;
        config.colors.swift_path = Some(PathBuf::from("Color.swift"));
        let exporter = Exporter::new(config).unwrap();

        let files = exporter
            .export_colors(&[pair("a", "a", 1.0), pair("a", "a", 0.5)])
            .unwrap();
        let swift = &find(&files, "Color.swift").unwrap().contents;
        assert_eq!(swift.matches("static var a:").count(), 1);
        assert!(swift.contains("red: 0.500"));
    }

    fn swift_only(duplicates: DuplicatePolicy) -> Exporter {
        let mut config = ExportConfig::default();
        config.colors.group_using_namespace = true;
        config.colors.duplicates = duplicates;
        config.colors.swift_path = Some(PathBuf::from("Color.swift"));
        Exporter::new(config).unwrap()
    }

    #[test]
    fn test_same_name_in_two_folders_is_rejected() {
        let err = swift_only(DuplicatePolicy::Reject)
            .export_colors(&[pair("brand", "ui/brand", 1.0), pair("brand", "ux/brand", 0.5)])
            .unwrap_err();
        match err {
            Error::DuplicateIdentifier { identifier, .. } => assert_eq!(identifier, "brand"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_names_differing_in_punctuation_are_rejected() {
        let err = swift_only(DuplicatePolicy::Reject)
            .export_colors(&[
                pair("brand-primary", "a/bp", 1.0),
                pair("brand primary", "b/bp", 0.5),
            ])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateIdentifier { ref identifier, .. } if identifier == "brandPrimary"
        ));
    }

    #[test]
    fn test_identifier_clash_last_write_wins() {
        let files = swift_only(DuplicatePolicy::LastWriteWins)
            .export_colors(&[pair("brand", "ui/brand", 1.0), pair("brand", "ux/brand", 0.5)])
            .unwrap();
        let swift = &find(&files, "Color.swift").unwrap().contents;
        assert_eq!(swift.matches("static var brand:").count(), 1);
        assert!(swift.contains(r#"UIColor(named: "ux/brand""#));
        // the catalog still holds both colorsets
        assert!(find(&files, "ui/brand.colorset/Contents.json").is_some());
        assert!(find(&files, "ux/brand.colorset/Contents.json").is_some());
    }

    #[test]
    fn test_catalog_only_export_ignores_identifier_clash() {
        let mut config = ExportConfig::default();
        config.colors.group_using_namespace = true;
        let files = Exporter::new(config)
            .unwrap()
            .export_colors(&[pair("brand", "ui/brand", 1.0), pair("brand", "ux/brand", 0.5)])
            .unwrap();
        assert_eq!(files.len(), 5);
    }

    #[test]
    fn test_style_names_generating_same_identifier_are_rejected() {
        let mut config = ExportConfig::default();
        config.typography.styles_path = Some(PathBuf::from("TextStyle.swift"));
        let exporter = Exporter::new(config).unwrap();

        let styles = vec![
            TextStyle::new("body text", "Helvetica", 14.0).unwrap(),
            TextStyle::new("body-text", "Helvetica", 14.0).unwrap(),
        ];
        let err = exporter
            .export_text_styles(&styles, &StyleResolver::new(MetricsTable::apple()))
            .unwrap_err();
        match err {
            Error::DuplicateIdentifier {
                identifier,
                first,
                second,
            } => {
                assert_eq!(identifier, "bodyText");
                assert_eq!(first, "body text");
                assert_eq!(second, "body-text");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_swift_sources_reference_catalog() {
        let mut config = ExportConfig::default();
        config.colors.group_using_namespace = true;
        config.colors.assets_in_main_bundle = true;
        config.colors.swift_path = Some(PathBuf::from("Sources/Color.swift"));
        config.colors.swiftui_path = Some(PathBuf::from("Sources/Color+SwiftUI.swift"));
        let exporter = Exporter::new(config).unwrap();

        let files = exporter
            .export_colors(&[pair("brand primary", "ui/brand primary", 1.0)])
            .unwrap();
        let uikit = &find(&files, "Color.swift").unwrap().contents;
        let swiftui = &find(&files, "Color+SwiftUI.swift").unwrap().contents;

        assert!(uikit.contains(r#"UIColor(named: "ui/brand primary", in: Bundle.main"#));
        assert!(uikit.contains("static var brandPrimary: UIColor"));
        assert!(swiftui.contains(r#"Color("ui/brand primary", bundle: Bundle.main)"#));
        assert!(!uikit.contains("BundleProvider"));
    }

    #[test]
    fn test_text_style_sources() {
        let mut config = ExportConfig::default();
        config.typography.font_extension_path = Some(PathBuf::from("UIFont+extension.swift"));
        config.typography.styles_path = Some(PathBuf::from("TextStyle.swift"));
        let exporter = Exporter::new(config).unwrap();

        let styles = vec![TextStyle::new("body", "Helvetica", 14.0)
            .unwrap()
            .line_height(20.0)
            .unwrap()];
        let resolver = StyleResolver::new(MetricsTable::new(1.0).family("Helvetica", 15.05 / 14.0));
        let files = exporter.export_text_styles(&styles, &resolver).unwrap();

        let fonts = &find(&files, "UIFont+extension.swift").unwrap().contents;
        assert!(fonts.contains(r#"customFont("Helvetica", size: 14.0)"#));
        let text = &find(&files, "TextStyle.swift").unwrap().contents;
        assert!(text.contains("static let body: TextStyle = {"));
        assert!(text.contains(r#"TextStyle.makeFont("Helvetica", size: 14.0)"#));
        assert!(text.contains("lineHeightMultiple: 1.329,"));
        assert!(text.contains("lineBreakMode: nil"));
        assert!(text.contains("textCase: nil"));
    }

    fn styles_only() -> Exporter {
        let mut config = ExportConfig::default();
        config.typography.styles_path = Some(PathBuf::from("TextStyle.swift"));
        Exporter::new(config).unwrap()
    }

    #[test]
    fn test_styles_without_font_extension_are_self_contained() {
        let styles = vec![TextStyle::new("body", "Helvetica", 14.0).unwrap()];
        let files = styles_only()
            .export_text_styles(&styles, &StyleResolver::new(MetricsTable::apple()))
            .unwrap();

        assert_eq!(files.len(), 1);
        let text = &files[0].contents;
        assert!(!text.contains("UIFont.body()"));
        assert!(text.contains("static func makeFont(_ name: String, size: CGFloat) -> UIFont"));
        assert!(text.contains(r#"let font = TextStyle.makeFont("Helvetica", size: 14.0)"#));
    }

    #[test]
    fn test_unknown_family_converts_line_height_at_runtime() {
        let styles = vec![TextStyle::new("body", "Inter", 14.0)
            .unwrap()
            .line_height(20.0)
            .unwrap()];
        let files = styles_only()
            .export_text_styles(&styles, &StyleResolver::new(MetricsTable::apple()))
            .unwrap();

        let text = &files[0].contents;
        assert!(text.contains("lineHeightMultiple: TextStyle.multiple(lineHeight: 20.0, for: font),"));
    }

    #[test]
    fn test_known_family_bakes_line_height_multiple() {
        let styles = vec![TextStyle::new("body", "Helvetica", 14.0)
            .unwrap()
            .line_height(20.0)
            .unwrap()];
        let resolver = StyleResolver::new(MetricsTable::new(1.0).family("Helvetica", 15.05 / 14.0));
        let files = styles_only().export_text_styles(&styles, &resolver).unwrap();

        let text = &files[0].contents;
        assert!(!text.contains("TextStyle.multiple(lineHeight:"));
        assert!(text.contains("lineHeightMultiple: 1.329,"));
    }

    #[test]
    fn test_text_case_is_emitted() {
        let styles = vec![TextStyle::new("caption", "Helvetica", 12.0)
            .unwrap()
            .text_case(TextCase::Uppercased)];
        let files = styles_only()
            .export_text_styles(&styles, &StyleResolver::new(MetricsTable::apple()))
            .unwrap();

        let text = &files[0].contents;
        assert!(text.contains("textCase: .uppercased"));
        assert!(text.contains("public let textCase: TextCase?"));
    }

    #[test]
    fn test_font_names_are_escaped() {
        let mut config = ExportConfig::default();
        config.typography.font_extension_path = Some(PathBuf::from("UIFont+extension.swift"));
        config.typography.styles_path = Some(PathBuf::from("TextStyle.swift"));
        let styles = vec![TextStyle::new("odd", r#"Ac"me\Sans"#, 12.0).unwrap()];
        let files = Exporter::new(config)
            .unwrap()
            .export_text_styles(&styles, &StyleResolver::new(MetricsTable::apple()))
            .unwrap();

        let fonts = &find(&files, "UIFont+extension.swift").unwrap().contents;
        assert!(fonts.contains(r#"customFont("Ac\"me\\Sans", size: 12.0)"#));
        let text = &find(&files, "TextStyle.swift").unwrap().contents;
        assert!(text.contains(r#"TextStyle.makeFont("Ac\"me\\Sans", size: 12.0)"#));
    }

    #[test]
    fn test_asset_names_are_valid_string_literals() {
        let mut config = ExportConfig::default();
        config.colors.swift_path = Some(PathBuf::from("Color.swift"));
        let files = Exporter::new(config)
            .unwrap()
            .export_colors(&[pair(r#"say "hi""#, r#"say "hi""#, 1.0)])
            .unwrap();

        let swift = &find(&files, "Color.swift").unwrap().contents;
        assert!(swift.contains(r#"UIColor(named: "say _hi_", in:"#));
    }

    #[test]
    fn test_write_output_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![OutputFile::new("a/b/c.txt", "hello".to_string())];
        write_output(dir.path(), &files).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("a/b/c.txt")).unwrap(),
            "hello"
        );
    }
}
