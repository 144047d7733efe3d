//! Pre-compiled template emitter.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use super::registry::TemplateRegistry;
use crate::config::NamingConfig;
use crate::error::Result;

/// An emitter with every registered template compiled up front.
///
/// # Example
///
/// ```rust
/// use tokenport::render::{Emitter, TemplateRegistry};
/// use tokenport::NamingConfig;
///
/// let mut registry = TemplateRegistry::new();
/// registry.add_builtin("greeting", "let {{ name | identifier }} = 1");
///
/// let emitter = Emitter::new(&registry, &NamingConfig::default()).unwrap();
/// let out = emitter
///     .render("greeting", &serde_json::json!({"name": "brand primary"}))
///     .unwrap();
/// assert_eq!(out, "let brandPrimary = 1");
/// ```
pub struct Emitter {
    env: Environment<'static>,
}

impl Emitter {
    /// Compiles every template in `registry`.
    ///
    /// # Errors
    ///
    /// Returns an error if a template cannot be read or has a syntax error.
    pub fn new(registry: &TemplateRegistry, naming: &NamingConfig) -> Result<Self> {
        let mut env = Environment::new();
        register_filters(&mut env, naming);
        // generated sources keep the trailing newline of their template
        env.set_keep_trailing_newline(true);

        let mut emitter = Self { env };
        let names: Vec<String> = registry.names().map(str::to_string).collect();
        for name in names {
            let source = registry.get_content(&name)?;
            emitter.add_template(&name, &source)?;
        }
        Ok(emitter)
    }

    /// Creates an emitter over the built-in templates only.
    pub fn builtin(naming: &NamingConfig) -> Result<Self> {
        Self::new(&TemplateRegistry::with_builtins(), naming)
    }

    /// Registers a named template, compiling it immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}

/// Encodes a catalog descriptor as pretty-printed JSON with a trailing newline.
pub fn encode_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
