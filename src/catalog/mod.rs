//! Color asset catalog assembly.
//!
//! This module provides:
//!
//! - [`to_hex`] / [`to_decimal`]: channel encodings of a color
//! - [`resolve_namespace`]: hierarchical name to folder path and leaf
//! - [`CatalogBuilder`]: color pairs to a [`ColorCatalog`]
//! - the `Contents.json` models in [`contents`]
//!
//! The builder only computes structure. Writing files is left to
//! [`Exporter`](crate::Exporter) and its caller.

mod builder;
pub mod contents;
mod encode;
mod namespace;

pub use builder::{
    Appearance, CatalogBuilder, ColorCatalog, ColorCatalogEntry, ColorVariant, DirectoryMarker,
    DuplicatePolicy, RootMarker, COLORSET_EXTENSION, CONTENTS_FILE,
};
pub use contents::ColorSpace;
pub use encode::{
    decimal_channel, hex_channel, to_decimal, to_hex, DecimalComponents, HexComponents,
};
pub use namespace::{resolve_namespace, NamespacePath, NAMESPACE_SEPARATOR};
