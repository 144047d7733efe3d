//! Font metrics used to turn absolute line heights into multiples.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Natural line-height information for fonts, supplied by the rendering surface.
pub trait FontMetrics {
    /// Natural line height (ascent + descent + leading) of `family` at `size`
    /// points, or `None` when the family is unknown.
    fn line_height(&self, family: &str, size: f64) -> Option<f64>;

    /// Natural line height of the system font at `size` points.
    ///
    /// Used when [`line_height`](Self::line_height) cannot resolve a family.
    fn system_line_height(&self, size: f64) -> f64;
}

/// System font (SF Pro) line height per point.
pub const SYSTEM_LINE_HEIGHT_RATIO: f64 = 1.193359375;

/// Line height per point for families bundled with Apple platforms.
const APPLE_FAMILIES: &[(&str, f64)] = &[
    ("SF Pro", SYSTEM_LINE_HEIGHT_RATIO),
    ("SF Pro Text", SYSTEM_LINE_HEIGHT_RATIO),
    ("SF Pro Display", SYSTEM_LINE_HEIGHT_RATIO),
    ("Helvetica", 1.149),
    ("Helvetica Neue", 1.193),
    ("Avenir", 1.366),
    ("Avenir Next", 1.366),
    ("Georgia", 1.136),
    ("Menlo", 1.164),
    ("Courier", 1.133),
    ("Courier New", 1.133),
    ("Times New Roman", 1.149),
];

static APPLE: Lazy<MetricsTable> = Lazy::new(|| {
    APPLE_FAMILIES
        .iter()
        .fold(MetricsTable::new(SYSTEM_LINE_HEIGHT_RATIO), |table, (family, ratio)| {
            table.family(family, *ratio)
        })
});

/// A [`FontMetrics`] backed by a table of line-height-per-point ratios.
///
/// Lookups are case-insensitive. A PostScript-style name such as
/// `Helvetica-Bold` falls back to its family part (`Helvetica`).
///
/// # Example
///
/// ```rust
/// use tokenport::style::{FontMetrics, MetricsTable};
///
/// let metrics = MetricsTable::new(1.25).family("Inter", 1.5);
/// assert_eq!(metrics.line_height("inter", 10.0), Some(15.0));
/// assert_eq!(metrics.line_height("Unknown", 10.0), None);
/// assert_eq!(metrics.system_line_height(10.0), 12.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    ratios: HashMap<String, f64>,
    system_ratio: f64,
}

impl MetricsTable {
    /// Creates an empty table with the given system-font ratio.
    pub fn new(system_ratio: f64) -> Self {
        Self {
            ratios: HashMap::new(),
            system_ratio,
        }
    }

    /// A table preloaded with common Apple platform families.
    pub fn apple() -> Self {
        APPLE.clone()
    }

    /// Adds or replaces a family's line-height-per-point ratio.
    pub fn family(mut self, family: &str, ratio: f64) -> Self {
        self.ratios.insert(family.to_lowercase(), ratio);
        self
    }

    fn ratio(&self, family: &str) -> Option<f64> {
        let key = family.to_lowercase();
        if let Some(ratio) = self.ratios.get(&key) {
            return Some(*ratio);
        }
        let (base, _style) = key.split_once('-')?;
        self.ratios.get(base).copied()
    }
}

impl Default for MetricsTable {
    fn default() -> Self {
        Self::apple()
    }
}

impl FontMetrics for MetricsTable {
    fn line_height(&self, family: &str, size: f64) -> Option<f64> {
        self.ratio(family).map(|ratio| ratio * size)
    }

    fn system_line_height(&self, size: f64) -> f64 {
        self.system_ratio * size
    }
}
