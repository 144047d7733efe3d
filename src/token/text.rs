//! Text style tokens and the attribute enums they carry.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
    Natural,
}

/// How a paragraph wraps or truncates overflowing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineBreakMode {
    ByWordWrapping,
    ByCharWrapping,
    ByClipping,
    ByTruncatingHead,
    ByTruncatingTail,
    ByTruncatingMiddle,
}

/// Underline decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnderlineKind {
    Single,
    Thick,
    Double,
}

/// Strikethrough decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrikethroughKind {
    Single,
    Thick,
    Double,
}

/// Case transformation applied to the text before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextCase {
    Original,
    Uppercased,
    Lowercased,
}

/// A text style token.
///
/// `line_height` is absolute (points), not a multiple. Letter spacing may be
/// negative to tighten tracking. The remaining attributes are optional
/// style-level values that feed the resolution chain in
/// [`StyleResolver`](crate::style::StyleResolver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTextStyle")]
pub struct TextStyle {
    pub name: String,
    pub font_name: String,
    pub font_size: f64,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub alignment: Option<TextAlignment>,
    pub line_break_mode: Option<LineBreakMode>,
    pub underline: Option<UnderlineKind>,
    pub strikethrough: Option<StrikethroughKind>,
    pub text_case: Option<TextCase>,
}

impl TextStyle {
    /// Creates a style with only the required attributes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFontSize`] if `font_size` is not a positive number.
    pub fn new(
        name: impl Into<String>,
        font_name: impl Into<String>,
        font_size: f64,
    ) -> Result<Self> {
        let style = Self {
            name: name.into(),
            font_name: font_name.into(),
            font_size,
            line_height: None,
            letter_spacing: None,
            alignment: None,
            line_break_mode: None,
            underline: None,
            strikethrough: None,
            text_case: None,
        };
        style.validate()?;
        Ok(style)
    }

    /// Sets the absolute line height.
    pub fn line_height(mut self, line_height: f64) -> Result<Self> {
        self.line_height = Some(line_height);
        self.validate()?;
        Ok(self)
    }

    pub fn letter_spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }

    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = Some(mode);
        self
    }

    pub fn underline(mut self, kind: UnderlineKind) -> Self {
        self.underline = Some(kind);
        self
    }

    pub fn strikethrough(mut self, kind: StrikethroughKind) -> Self {
        self.strikethrough = Some(kind);
        self
    }

    pub fn text_case(mut self, case: TextCase) -> Self {
        self.text_case = Some(case);
        self
    }

    /// Checks the numeric invariants of the style.
    pub fn validate(&self) -> Result<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(Error::InvalidFontSize {
                name: self.name.clone(),
                size: self.font_size,
            });
        }
        if let Some(line_height) = self.line_height {
            if !line_height.is_finite() || line_height <= 0.0 {
                return Err(Error::InvalidLineHeight {
                    name: self.name.clone(),
                    line_height,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct RawTextStyle {
    name: String,
    font_name: String,
    font_size: f64,
    #[serde(default)]
    line_height: Option<f64>,
    #[serde(default)]
    letter_spacing: Option<f64>,
    #[serde(default)]
    alignment: Option<TextAlignment>,
    #[serde(default)]
    line_break_mode: Option<LineBreakMode>,
    #[serde(default)]
    underline: Option<UnderlineKind>,
    #[serde(default)]
    strikethrough: Option<StrikethroughKind>,
    #[serde(default)]
    text_case: Option<TextCase>,
}

impl TryFrom<RawTextStyle> for TextStyle {
    type Error = Error;

    fn try_from(raw: RawTextStyle) -> Result<Self> {
        let style = TextStyle {
            name: raw.name,
            font_name: raw.font_name,
            font_size: raw.font_size,
            line_height: raw.line_height,
            letter_spacing: raw.letter_spacing,
            alignment: raw.alignment,
            line_break_mode: raw.line_break_mode,
            underline: raw.underline,
            strikethrough: raw.strikethrough,
            text_case: raw.text_case,
        };
        style.validate()?;
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_font_size() {
        assert!(matches!(
            TextStyle::new("body", "Helvetica", 0.0),
            Err(Error::InvalidFontSize { .. })
        ));
    }

    #[test]
    fn test_new_rejects_negative_font_size() {
        assert!(TextStyle::new("body", "Helvetica", -12.0).is_err());
    }

    #[test]
    fn test_line_height_must_be_positive() {
        let style = TextStyle::new("body", "Helvetica", 14.0).unwrap();
        assert!(matches!(
            style.line_height(0.0),
            Err(Error::InvalidLineHeight { .. })
        ));
    }

    #[test]
    fn test_negative_letter_spacing_is_allowed() {
        let style = TextStyle::new("title", "Helvetica", 32.0)
            .unwrap()
            .letter_spacing(-0.4);
        assert_eq!(style.letter_spacing, Some(-0.4));
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_deserialize_enums_in_camel_case() {
        let style: TextStyle = serde_json::from_str(
            r#"{"name": "caption", "font_name": "Inter", "font_size": 11,
                "line_break_mode": "byTruncatingTail", "underline": "single",
                "text_case": "uppercased"}"#,
        )
        .unwrap();
        assert_eq!(style.line_break_mode, Some(LineBreakMode::ByTruncatingTail));
        assert_eq!(style.underline, Some(UnderlineKind::Single));
        assert_eq!(style.text_case, Some(TextCase::Uppercased));
        assert_eq!(style.line_height, None);
    }

    #[test]
    fn test_deserialize_rejects_bad_font_size() {
        let result: std::result::Result<TextStyle, _> =
            serde_json::from_str(r#"{"name": "x", "font_name": "Inter", "font_size": -1}"#);
        assert!(result.is_err());
    }
}
