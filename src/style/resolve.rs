//! Resolution of text style tokens into attribute sets.
//!
//! Each attribute is resolved independently, highest precedence first:
//!
//! 1. the instance override passed at the call site
//! 2. the value carried by the style token
//! 3. the supplied default
//! 4. absent, leaving the choice to the rendering surface
//!
//! Line height is the only derived attribute: the token's absolute value is
//! divided by the font's natural line height to give a multiple.

use super::attributes::{FontRequest, PartialAttributeSet, StyleAttributeSet};
use super::metrics::{FontMetrics, MetricsTable};
use crate::token::TextStyle;

/// Converts an absolute line height into a line-height multiple.
///
/// Computed as `((100 * line_height) / natural) / 100`, the form generated
/// code has always used; it equals `line_height / natural` within floating
/// point tolerance.
///
/// # Example
///
/// ```rust
/// use tokenport::style::line_height_multiple;
///
/// assert!((line_height_multiple(24.0, 20.0) - 1.2).abs() < 1e-6);
/// ```
pub fn line_height_multiple(line_height: f64, natural_line_height: f64) -> f64 {
    ((100.0 * line_height) / natural_line_height) / 100.0
}

/// Resolves [`TextStyle`]s into [`StyleAttributeSet`]s.
///
/// The resolver holds no mutable state: resolving the same style with
/// different overrides any number of times always yields independent values.
///
/// # Example
///
/// ```rust
/// use tokenport::style::{MetricsTable, PartialAttributeSet, StyleResolver};
/// use tokenport::token::{TextAlignment, TextStyle};
///
/// let resolver = StyleResolver::new(MetricsTable::new(1.0).family("Inter", 1.25));
/// let style = TextStyle::new("body", "Inter", 16.0).unwrap()
///     .line_height(24.0).unwrap()
///     .alignment(TextAlignment::Left);
///
/// let overrides = PartialAttributeSet::new().alignment(TextAlignment::Center);
/// let set = resolver.resolve(&style, Some(&overrides), None);
///
/// assert_eq!(set.alignment, Some(TextAlignment::Center));
/// assert!((set.line_height_multiple.unwrap() - 1.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleResolver<M = MetricsTable> {
    metrics: M,
}

impl<M: FontMetrics> StyleResolver<M> {
    pub fn new(metrics: M) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Natural line height of the requested font.
    ///
    /// Falls back to the system font at the same size when the family is
    /// unknown to the metrics source.
    pub fn natural_line_height(&self, font: &FontRequest) -> f64 {
        match self.metrics.line_height(&font.name, font.size) {
            Some(height) => height,
            None => {
                tracing::warn!(
                    "font '{}' has no known metrics, using system font metrics at {}pt",
                    font.name,
                    font.size
                );
                self.metrics.system_line_height(font.size)
            }
        }
    }

    /// Resolves a style against optional overrides and defaults.
    pub fn resolve(
        &self,
        style: &TextStyle,
        overrides: Option<&PartialAttributeSet>,
        defaults: Option<&PartialAttributeSet>,
    ) -> StyleAttributeSet {
        let empty = PartialAttributeSet::default();
        let over = overrides.unwrap_or(&empty);
        let default = defaults.unwrap_or(&empty);

        let font = FontRequest {
            name: style.font_name.clone(),
            size: style.font_size,
        };

        // an override makes the token's line height irrelevant
        let derived_from = match over.line_height_multiple {
            Some(_) => None,
            None => style.line_height,
        };
        let style_multiple =
            derived_from.and_then(|line_height| self.derive_multiple(line_height, &font));
        let runtime_line_height = derived_from.filter(|_| !self.has_metrics(&font));

        let set = StyleAttributeSet {
            line_height_multiple: pick(
                over.line_height_multiple,
                style_multiple,
                default.line_height_multiple,
            ),
            line_break_mode: pick(
                over.line_break_mode,
                style.line_break_mode,
                default.line_break_mode,
            ),
            alignment: pick(over.alignment, style.alignment, default.alignment),
            strikethrough: pick(over.strikethrough, style.strikethrough, default.strikethrough),
            underline: pick(over.underline, style.underline, default.underline),
            letter_spacing: pick(
                over.letter_spacing,
                style.letter_spacing,
                default.letter_spacing,
            ),
            text_case: pick(over.text_case, style.text_case, default.text_case),
            runtime_line_height,
            font,
        };

        tracing::debug!(
            "style '{}' resolved: line height multiple {:?}",
            style.name,
            set.line_height_multiple
        );
        set
    }

    fn has_metrics(&self, font: &FontRequest) -> bool {
        self.metrics.line_height(&font.name, font.size).is_some()
    }

    fn derive_multiple(&self, line_height: f64, font: &FontRequest) -> Option<f64> {
        let natural = self.natural_line_height(font);
        if natural.is_finite() && natural > 0.0 {
            Some(line_height_multiple(line_height, natural))
        } else {
            tracing::warn!(
                "font '{}' reports natural line height {}, skipping line height",
                font.name,
                natural
            );
            None
        }
    }
}

fn pick<T>(over: Option<T>, style: Option<T>, default: Option<T>) -> Option<T> {
    over.or(style).or(default)
}
