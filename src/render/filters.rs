//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use crate::config::NamingConfig;
use crate::util::{camel_case, pascal_case};

/// Registers all built-in filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, naming: &NamingConfig) {
    let prefix = naming.active_prefix().map(str::to_string);

    env.add_filter("camel", |value: Value| -> String { camel_case(&value.to_string()) });
    env.add_filter("pascal", |value: Value| -> String { pascal_case(&value.to_string()) });

    // Swift member name, with the platform prefix when enabled:
    // "brand primary" -> "brandPrimary" or "dsBrandPrimary"
    env.add_filter("identifier", move |value: Value| -> String {
        identifier(&value.to_string(), prefix.as_deref())
    });

    env.add_filter("swift_float", |value: Value| -> String {
        if value.is_none() || value.is_undefined() {
            return "nil".to_string();
        }
        match f64::try_from(value.clone()) {
            Ok(number) => swift_float(number),
            Err(_) => value.to_string(),
        }
    });

    env.add_filter("swift_string", |value: Value| -> String { swift_string(&value.to_string()) });

    // Enum case literal: "byTruncatingTail" -> ".byTruncatingTail", none -> "nil"
    env.add_filter("swift_case", |value: Value| -> String {
        if value.is_none() || value.is_undefined() {
            "nil".to_string()
        } else {
            format!(".{}", value)
        }
    });
}

pub(crate) fn identifier(name: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{}{}", prefix, pascal_case(name)),
        None => camel_case(name),
    }
}

/// Quotes text as a Swift string literal.
pub(crate) fn swift_string(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for c in text.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            '\0' => literal.push_str("\\0"),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// Formats a number as a Swift floating point literal with at most three decimals.
pub(crate) fn swift_float(number: f64) -> String {
    let fixed = format!("{:.3}", number);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
