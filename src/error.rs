//! Error types for token export.

use thiserror::Error;

use crate::render::RegistryError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for tokenport operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Token Errors ====================
    /// A color channel is outside `[0, 1]` or not a finite number.
    #[error("color '{name}': {channel} channel {value} is outside [0, 1]")]
    ChannelOutOfRange {
        name: String,
        channel: &'static str,
        value: f64,
    },

    /// The light and dark members of a pair disagree on their names.
    #[error("color pair mismatch: light '{light}' paired with dark '{dark}'")]
    MismatchedPair { light: String, dark: String },

    /// A text style declares a font size that is zero, negative or not finite.
    #[error("text style '{name}': font size {size} must be positive")]
    InvalidFontSize { name: String, size: f64 },

    /// A text style declares a line height that is zero, negative or not finite.
    #[error("text style '{name}': line height {line_height} must be positive")]
    InvalidLineHeight { name: String, line_height: f64 },

    // ==================== Namespace Errors ====================
    /// The final segment of a hierarchical name is empty (e.g. `"ui/"`).
    #[error("color '{original_name}' has an empty name after its last '/'")]
    EmptyLeaf { original_name: String },

    /// A directory segment of a hierarchical name is empty (e.g. `"ui//brand"`).
    #[error("color '{original_name}' contains an empty namespace segment")]
    EmptySegment { original_name: String },

    /// A segment of a hierarchical name is only dots (e.g. `"ui/../x"`).
    #[error("color '{original_name}' has segment '{segment}', which is not a valid folder name")]
    InvalidSegment {
        original_name: String,
        segment: String,
    },

    // ==================== Catalog / Registry Errors ====================
    /// Two color tokens resolve to the same catalog location.
    #[error("duplicate color at catalog path '{path}'")]
    DuplicateColor { path: String },

    /// Two text styles share a name.
    #[error("duplicate text style '{name}'")]
    DuplicateStyle { name: String },

    /// Two tokens generate the same Swift member name.
    #[error("'{first}' and '{second}' both generate the Swift name '{identifier}'")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    /// A text style was requested by a name the registry does not know.
    #[error("unknown text style '{name}'")]
    UnknownStyle { name: String },

    // ==================== Emission Errors ====================
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
