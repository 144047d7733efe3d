//! Text-style attribute composition.
//!
//! This module provides:
//!
//! - [`StyleResolver`]: resolves a [`TextStyle`](crate::token::TextStyle)
//!   with overrides and defaults into a [`StyleAttributeSet`]
//! - [`PartialAttributeSet`]: optional attributes for overrides and defaults
//! - [`FontMetrics`] / [`MetricsTable`]: natural line heights of fonts
//! - [`StyleRegistry`]: resolved styles looked up by name
//!
//! Resolution never mutates a style; each call returns a fresh value.

mod attributes;
mod metrics;
mod registry;
mod resolve;

pub use attributes::{FontRequest, PartialAttributeSet, StyleAttributeSet};
pub use metrics::{FontMetrics, MetricsTable, SYSTEM_LINE_HEIGHT_RATIO};
pub use registry::{RegisteredStyle, StyleRegistry};
pub use resolve::{line_height_multiple, StyleResolver};
