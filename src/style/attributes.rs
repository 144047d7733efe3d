//! Attribute sets produced and consumed by style resolution.

use serde::{Deserialize, Serialize};

use crate::token::{LineBreakMode, StrikethroughKind, TextAlignment, TextCase, UnderlineKind};

/// The font a style asks for.
///
/// Carried through resolution untouched so the rendering surface can apply
/// its own fallback (system font at the same size) when `name` is unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontRequest {
    pub name: String,
    pub size: f64,
}

/// Optional attributes supplied as instance overrides or as defaults.
///
/// # Example
///
/// ```rust
/// use tokenport::style::PartialAttributeSet;
/// use tokenport::token::{LineBreakMode, TextAlignment};
///
/// let overrides = PartialAttributeSet::new()
///     .alignment(TextAlignment::Center)
///     .line_break_mode(LineBreakMode::ByTruncatingTail);
/// assert!(!overrides.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialAttributeSet {
    pub line_height_multiple: Option<f64>,
    pub line_break_mode: Option<LineBreakMode>,
    pub alignment: Option<TextAlignment>,
    pub strikethrough: Option<StrikethroughKind>,
    pub underline: Option<UnderlineKind>,
    pub letter_spacing: Option<f64>,
    pub text_case: Option<TextCase>,
}

impl PartialAttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_height_multiple(mut self, multiple: f64) -> Self {
        self.line_height_multiple = Some(multiple);
        self
    }

    pub fn line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = Some(mode);
        self
    }

    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn strikethrough(mut self, kind: StrikethroughKind) -> Self {
        self.strikethrough = Some(kind);
        self
    }

    pub fn underline(mut self, kind: UnderlineKind) -> Self {
        self.underline = Some(kind);
        self
    }

    pub fn letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    pub fn text_case(mut self, case: TextCase) -> Self {
        self.text_case = Some(case);
        self
    }

    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Fully resolved paragraph and character attributes of a style.
///
/// Every attribute is independently optional; `None` means the rendering
/// surface should use its own default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleAttributeSet {
    pub font: FontRequest,
    pub line_height_multiple: Option<f64>,
    pub line_break_mode: Option<LineBreakMode>,
    pub alignment: Option<TextAlignment>,
    pub strikethrough: Option<StrikethroughKind>,
    pub underline: Option<UnderlineKind>,
    pub letter_spacing: Option<f64>,
    pub text_case: Option<TextCase>,
    /// Absolute line height to convert against the real font at runtime.
    ///
    /// Set when the multiple was derived from system metrics because the
    /// font family had no known metrics.
    pub runtime_line_height: Option<f64>,
}

impl StyleAttributeSet {
    /// True when any paragraph-level attribute is present.
    pub fn has_paragraph_attributes(&self) -> bool {
        self.line_height_multiple.is_some()
            || self.line_break_mode.is_some()
            || self.alignment.is_some()
    }
}
