//! # Tokenport - design tokens for Apple platforms
//!
//! Tokenport turns design tokens into the artifacts an iOS project consumes:
//! an Xcode asset catalog of named colors, and text styles whose line
//! heights and decorations are resolved ahead of time.
//!
//! ## Colors
//!
//! Each [`ColorPair`](token::ColorPair) becomes one `.colorset` folder with
//! an `any` variant and, when a dark counterpart exists, a `dark` variant.
//! Names like `ui/brand` can be grouped into namespace folders.
//!
//! ```rust
//! use tokenport::catalog::CatalogBuilder;
//! use tokenport::token::{Color, ColorPair, Rgba};
//!
//! let light = Color::new("brand", "ui/brand", Rgba::new(1.0, 0.0, 0.0, 1.0)).unwrap();
//! let catalog = CatalogBuilder::new(true)
//!     .build(&[ColorPair::light_only(light)])
//!     .unwrap();
//!
//! assert_eq!(catalog.entries[0].directory_path, vec!["ui"]);
//! assert_eq!(catalog.entries[0].variants[0].components.red, "0xFF");
//! ```
//!
//! ## Text styles
//!
//! A [`TextStyle`](token::TextStyle) is resolved into a
//! [`StyleAttributeSet`](style::StyleAttributeSet). Attributes come from
//! instance overrides first, then the style, then registry defaults. An
//! absolute line height becomes a multiple of the font's natural height.
//!
//! ```rust
//! use tokenport::style::{MetricsTable, StyleResolver};
//! use tokenport::token::TextStyle;
//!
//! let resolver = StyleResolver::new(MetricsTable::new(1.0).family("Helvetica", 1.25));
//! let body = TextStyle::new("body", "Helvetica", 16.0).unwrap().line_height(30.0).unwrap();
//!
//! let attributes = resolver.resolve(&body, None, None);
//! assert_eq!(attributes.line_height_multiple, Some(1.5));
//! ```
//!
//! ## Exporting
//!
//! [`Exporter`] combines both with the Swift templates under an
//! [`ExportConfig`], and [`write_output`] puts the result on disk.
//!
//! ## Modules
//!
//! - [`token`]: color and text-style tokens
//! - [`catalog`]: asset catalog structure and encodings
//! - [`style`]: attribute resolution and the style registry
//! - [`render`]: template registry and emitter
//! - [`config`]: export configuration
//! - [`export`]: the export pipeline

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod render;
pub mod style;
pub mod token;
mod util;

pub use config::{ColorsConfig, ExportConfig, NamingConfig, TypographyConfig};
pub use error::{Error, Result};
pub use export::{write_output, Exporter, OutputFile};
pub use util::{camel_case, pascal_case, sanitize_segment};
