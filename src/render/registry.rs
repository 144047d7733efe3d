//! Template lookup across built-in sources and a user override directory.
//!
//! Built-in templates are always present. A template directory can shadow
//! any of them: a file `Color.swift.tmpl` replaces the built-in `Color.swift`.
//! Files that match no built-in are still registered, so overrides can
//! `{% include %}` their own partials.
//!
//! # Supported Extensions
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.tmpl` |
//! | 2 | `.jinja2` |
//! | 3 (lowest) | `.j2` |
//!
//! If `Color.swift.tmpl` and `Color.swift.j2` both exist, `.tmpl` wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Recognized template file extensions in priority order.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".tmpl", ".jinja2", ".j2"];

/// Where a template's source comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled into the crate.
    Builtin(&'static str),
    /// Read from disk when the emitter is built.
    File(PathBuf),
}

/// Error type for template registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("template not found: \"{name}\"")]
    NotFound { name: String },

    #[error("failed to read template \"{}\": {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
struct OverrideFile {
    name: String,
    path: PathBuf,
    priority: usize,
}

/// Registry resolving template names to their sources.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, TemplateSource>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in template.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for &(name, source) in super::templates::BUILTIN_TEMPLATES {
            registry.add_builtin(name, source);
        }
        registry
    }

    /// Registers (or replaces) a template compiled into the binary.
    pub fn add_builtin(&mut self, name: impl Into<String>, source: &'static str) {
        self.templates
            .insert(name.into(), TemplateSource::Builtin(source));
    }

    /// Registers every template file below `root`, shadowing same-name entries.
    ///
    /// Names are the path relative to `root` with `/` separators and the
    /// template extension removed. Returns the number of names registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ReadError`] if the directory cannot be walked.
    pub fn add_override_dir(&mut self, root: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let root = root.as_ref();
        let mut files = Vec::new();
        walk_dir_recursive(root, root, &mut files).map_err(|source| RegistryError::ReadError {
            path: root.to_path_buf(),
            source,
        })?;

        // higher-priority extensions first, so the first file per name wins
        files.sort_by_key(|f| f.priority);

        let mut registered: HashMap<String, PathBuf> = HashMap::new();
        for file in files {
            if registered.contains_key(&file.name) {
                tracing::debug!(
                    "ignoring {} (shadowed by a higher-priority extension)",
                    file.path.display()
                );
                continue;
            }
            registered.insert(file.name, file.path);
        }

        let count = registered.len();
        for (name, path) in registered {
            tracing::debug!("template '{}' overridden by {}", name, path.display());
            self.templates.insert(name, TemplateSource::File(path));
        }
        Ok(count)
    }

    /// Looks up a template by name.
    pub fn get(&self, name: &str) -> Result<&TemplateSource, RegistryError> {
        self.templates.get(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })
    }

    /// Returns the source text of a template, reading override files from disk.
    pub fn get_content(&self, name: &str) -> Result<String, RegistryError> {
        match self.get(name)? {
            TemplateSource::Builtin(source) => Ok((*source).to_string()),
            TemplateSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| RegistryError::ReadError {
                    path: path.clone(),
                    source,
                })
            }
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Returns an iterator over all registered template names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<OverrideFile>,
) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(current)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if let Some(file) = parse_override_file(&path, root) {
            files.push(file);
        }
    }
    Ok(())
}

/// Returns `None` for files without a recognized template extension.
fn parse_override_file(path: &Path, root: &Path) -> Option<OverrideFile> {
    let relative = path.strip_prefix(root).ok()?;
    let relative = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");

    let (priority, ext) = TEMPLATE_EXTENSIONS
        .iter()
        .enumerate()
        .find(|(_, ext)| relative.ends_with(*ext))?;
    let name = relative.strip_suffix(ext)?.to_string();

    Some(OverrideFile {
        name,
        path: path.to_path_buf(),
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtins_registered() {
        let registry = TemplateRegistry::with_builtins();
        assert!(registry.get("Color.swift").is_ok());
        assert!(registry.get("UIFont+extension.swift").is_ok());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_not_found() {
        let registry = TemplateRegistry::new();
        assert!(matches!(
            registry.get("nope"),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_add_builtin_replaces() {
        let mut registry = TemplateRegistry::new();
        registry.add_builtin("a", "first");
        registry.add_builtin("a", "second");
        assert_eq!(registry.get_content("a").unwrap(), "second");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_override_dir_shadows_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Color.swift.tmpl"), "custom {{ colors | length }}").unwrap();

        let mut registry = TemplateRegistry::with_builtins();
        let count = registry.add_override_dir(dir.path()).unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            registry.get_content("Color.swift").unwrap(),
            "custom {{ colors | length }}"
        );
    }

    #[test]
    fn test_override_extension_priority() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Color.swift.j2"), "from j2").unwrap();
        fs::write(dir.path().join("Color.swift.tmpl"), "from tmpl").unwrap();

        let mut registry = TemplateRegistry::new();
        registry.add_override_dir(dir.path()).unwrap();
        assert_eq!(registry.get_content("Color.swift").unwrap(), "from tmpl");
    }

    #[test]
    fn test_override_nested_and_ignored_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("partials")).unwrap();
        fs::write(dir.path().join("partials").join("header.jinja2"), "// header").unwrap();
        fs::write(dir.path().join("README.md"), "not a template").unwrap();

        let mut registry = TemplateRegistry::new();
        registry.add_override_dir(dir.path()).unwrap();

        assert!(registry.get("partials/header").is_ok());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_override_dir_is_read_error() {
        let mut registry = TemplateRegistry::new();
        let result = registry.add_override_dir("/definitely/not/here");
        assert!(matches!(result, Err(RegistryError::ReadError { .. })));
    }

    #[test]
    fn test_error_display_not_found() {
        let err = RegistryError::NotFound {
            name: "missing".to_string(),
        };
        assert!(err.to_string().contains("missing"));
    }
}
