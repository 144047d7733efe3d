//! The design-token model.
//!
//! - [`Color`] / [`ColorPair`]: color tokens with an optional dark counterpart
//! - [`TextStyle`]: font, size, spacing and decoration of a text style
//! - [`TokenSet`]: the on-disk form of both lists, as read by the CLI
//!
//! Tokens validate their numeric invariants when constructed or
//! deserialized, so every later stage can assume well-formed input.

mod color;
mod text;

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

pub use color::{Color, ColorPair, Rgba};
pub use text::{
    LineBreakMode, StrikethroughKind, TextAlignment, TextCase, TextStyle, UnderlineKind,
};

/// Color and text-style lists for one export run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenSet {
    #[serde(default)]
    pub colors: Vec<ColorPair>,
    #[serde(default)]
    pub text_styles: Vec<TextStyle>,
}

impl TokenSet {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads a token file, choosing the format by extension (`.yaml`/`.yml`
    /// for YAML, anything else as JSON).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        if crate::util::is_yaml_path(path) {
            Self::from_yaml_str(&source)
        } else {
            Self::from_json_str(&source)
        }
    }
}
