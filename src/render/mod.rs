//! Emission of Swift sources and catalog descriptors.
//!
//! - [`TemplateRegistry`]: built-in templates plus a user override directory
//! - [`Emitter`]: a minijinja environment with every template pre-compiled
//! - the template contexts ([`ColorsContext`], [`TypographyContext`])
//!
//! Templates see a few filters beyond the minijinja built-ins:
//!
//! | Filter | Effect |
//! |--------|--------|
//! | `camel` | `"brand primary"` to `brandPrimary` |
//! | `pascal` | `"brand primary"` to `BrandPrimary` |
//! | `identifier` | member name, with the platform prefix when enabled |
//! | `swift_float` | number literal, or `nil` for none |
//! | `swift_case` | enum case literal (`.byWordWrapping`), or `nil` |
//! | `swift_string` | quoted, escaped string literal |

mod context;
mod emitter;
mod filters;
mod registry;
pub mod templates;

pub use context::{ColorContext, ColorsContext, StyleContext, TypographyContext};
pub use emitter::{encode_json, Emitter};
pub(crate) use filters::identifier;
pub use registry::{RegistryError, TemplateRegistry, TemplateSource, TEMPLATE_EXTENSIONS};
