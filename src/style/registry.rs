//! Named lookup of resolved text styles.

use std::collections::HashMap;

use super::attributes::{PartialAttributeSet, StyleAttributeSet};
use super::metrics::{FontMetrics, MetricsTable};
use super::resolve::StyleResolver;
use crate::error::{Error, Result};
use crate::token::TextStyle;

/// A text style together with its precomputed attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredStyle {
    pub style: TextStyle,
    pub attributes: StyleAttributeSet,
}

/// A registry of text styles resolved once, up front.
///
/// Every style is resolved against the registry defaults when the registry
/// is built; lookups by name never resolve again and fail with
/// [`Error::UnknownStyle`] for names the registry does not hold.
///
/// # Example
///
/// ```rust
/// use tokenport::style::{MetricsTable, StyleRegistry, StyleResolver};
/// use tokenport::token::TextStyle;
///
/// let styles = vec![TextStyle::new("body", "Helvetica", 14.0).unwrap()];
/// let registry = StyleRegistry::build(&styles, StyleResolver::new(MetricsTable::apple()), None).unwrap();
///
/// assert!(registry.get("body").is_ok());
/// assert!(registry.get("headline").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StyleRegistry<M = MetricsTable> {
    resolver: StyleResolver<M>,
    defaults: Option<PartialAttributeSet>,
    entries: Vec<RegisteredStyle>,
    index: HashMap<String, usize>,
}

impl<M: FontMetrics> StyleRegistry<M> {
    /// Validates and resolves every style.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFontSize`] / [`Error::InvalidLineHeight`] for malformed styles
    /// - [`Error::DuplicateStyle`] if two styles share a name
    pub fn build(
        styles: &[TextStyle],
        resolver: StyleResolver<M>,
        defaults: Option<PartialAttributeSet>,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(styles.len());
        let mut index = HashMap::with_capacity(styles.len());

        for style in styles {
            style.validate()?;
            if index.contains_key(&style.name) {
                return Err(Error::DuplicateStyle {
                    name: style.name.clone(),
                });
            }
            let attributes = resolver.resolve(style, None, defaults.as_ref());
            index.insert(style.name.clone(), entries.len());
            entries.push(RegisteredStyle {
                style: style.clone(),
                attributes,
            });
        }

        tracing::info!("Style registry built: {} styles", entries.len());

        Ok(Self {
            resolver,
            defaults,
            entries,
            index,
        })
    }

    fn entry(&self, name: &str) -> Result<&RegisteredStyle> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| Error::UnknownStyle {
                name: name.to_string(),
            })
    }

    /// Precomputed attributes of a style.
    pub fn get(&self, name: &str) -> Result<&StyleAttributeSet> {
        self.entry(name).map(|e| &e.attributes)
    }

    /// The style token registered under `name`.
    pub fn style(&self, name: &str) -> Result<&TextStyle> {
        self.entry(name).map(|e| &e.style)
    }

    /// Resolves a registered style again with instance overrides.
    ///
    /// The registry itself is not modified.
    pub fn resolve_with(
        &self,
        name: &str,
        overrides: &PartialAttributeSet,
    ) -> Result<StyleAttributeSet> {
        let entry = self.entry(name)?;
        Ok(self
            .resolver
            .resolve(&entry.style, Some(overrides), self.defaults.as_ref()))
    }

    /// Registered styles in input order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredStyle> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.style.name.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{LineBreakMode, TextAlignment};

    fn resolver() -> StyleResolver {
        StyleResolver::new(MetricsTable::new(1.0).family("Inter", 1.25))
    }

    fn styles() -> Vec<TextStyle> {
        vec![
            TextStyle::new("title", "Inter", 24.0)
                .unwrap()
                .line_height(30.0)
                .unwrap(),
            TextStyle::new("body", "Inter", 16.0)
                .unwrap()
                .alignment(TextAlignment::Left),
        ]
    }

    #[test]
    fn test_get_precomputed() {
        let registry = StyleRegistry::build(&styles(), resolver(), None).unwrap();
        let title = registry.get("title").unwrap();
        assert_eq!(title.line_height_multiple, Some(1.0));
        assert_eq!(registry.len(), 2);
        assert!(registry.has("body"));
    }

    #[test]
    fn test_unknown_style_is_declared_failure() {
        let registry = StyleRegistry::build(&styles(), resolver(), None).unwrap();
        match registry.get("caption") {
            Err(Error::UnknownStyle { name }) => assert_eq!(name, "caption"),
            other => panic!("expected unknown style, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_style_rejected() {
        let mut list = styles();
        list.push(TextStyle::new("body", "Inter", 12.0).unwrap());
        assert!(matches!(
            StyleRegistry::build(&list, resolver(), None),
            Err(Error::DuplicateStyle { .. })
        ));
    }

    #[test]
    fn test_defaults_applied_at_build() {
        let defaults = PartialAttributeSet::new().line_break_mode(LineBreakMode::ByWordWrapping);
        let registry = StyleRegistry::build(&styles(), resolver(), Some(defaults)).unwrap();
        assert_eq!(
            registry.get("body").unwrap().line_break_mode,
            Some(LineBreakMode::ByWordWrapping)
        );
    }

    #[test]
    fn test_resolve_with_leaves_registry_untouched() {
        let registry = StyleRegistry::build(&styles(), resolver(), None).unwrap();
        let centered = registry
            .resolve_with(
                "body",
                &PartialAttributeSet::new().alignment(TextAlignment::Center),
            )
            .unwrap();
        assert_eq!(centered.alignment, Some(TextAlignment::Center));
        assert_eq!(
            registry.get("body").unwrap().alignment,
            Some(TextAlignment::Left)
        );
    }

    #[test]
    fn test_names_keep_input_order() {
        let registry = StyleRegistry::build(&styles(), resolver(), None).unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["title", "body"]);
    }
}
