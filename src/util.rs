//! Utility functions for naming and path handling.

use deunicode::deunicode;
use std::path::Path;

/// Converts a raw name segment into a filesystem-safe folder or file name.
///
/// Non-ASCII text is transliterated, characters outside
/// `[A-Za-z0-9 _-.]` become `_`, and surrounding whitespace is trimmed.
/// May return an empty string; callers decide whether that is an error.
///
/// # Example
///
/// ```rust
/// use tokenport::sanitize_segment;
///
/// assert_eq!(sanitize_segment(" Ação "), "Acao");
/// assert_eq!(sanitize_segment("a:b"), "a_b");
/// ```
pub fn sanitize_segment(segment: &str) -> String {
    deunicode(segment)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Converts a name to `lowerCamelCase`, suitable for a Swift member.
///
/// Word boundaries are any non-alphanumeric characters. An identifier that
/// would start with a digit is prefixed with `_`.
///
/// # Example
///
/// ```rust
/// use tokenport::camel_case;
///
/// assert_eq!(camel_case("brand primary"), "brandPrimary");
/// assert_eq!(camel_case("ui/brand-500"), "uiBrand500");
/// ```
pub fn camel_case(name: &str) -> String {
    let pascal = pascal_case(name);
    let mut chars = pascal.chars();
    let camel = match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    };
    escape_leading_digit(camel)
}

/// Converts a name to `UpperCamelCase`.
pub fn pascal_case(name: &str) -> String {
    let ascii = deunicode(name);
    let mut result = String::with_capacity(ascii.len());
    for word in ascii
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
        }
    }
    escape_leading_digit(result)
}

fn escape_leading_digit(ident: String) -> String {
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", ident)
    } else {
        ident
    }
}

/// Returns true for `.yaml` / `.yml` paths.
pub(crate) fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}
