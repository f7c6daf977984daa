//! Naming-convention conversions between raw content-type/field
//! identifiers and published schema names.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::config::BridgeConfig;

/// Schema names for the host's built-in content types. Custom types fall
/// back to the generic PascalCase transform.
static BUILTIN_TYPE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("post", "Post");
    map.insert("page", "Page");
    map
});

/// Converts a raw identifier to PascalCase, splitting on `_`, `-`, and
/// spaces: `my_post_type` becomes `MyPostType`.
pub fn to_pascal_case(input: &str) -> String {
    input
        .split(|c: char| c == '_' || c == '-' || c == ' ')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Converts a raw identifier to snake_case: an underscore is inserted
/// before each uppercase letter that follows a lowercase one, existing
/// separators and spaces become underscores, and the result is lowercased.
/// `myFieldName` becomes `my_field_name`.
pub fn to_snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_lower = false;
    for ch in input.chars() {
        if ch == '-' || ch == ' ' || ch == '_' {
            out.push('_');
            prev_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Resolves a raw content-type identifier to a published schema type name.
///
/// Config overrides win, then the built-in table, then the PascalCase
/// fallback. Returns `None` when no non-empty name can be derived, which
/// callers treat as "skip this target silently".
pub fn schema_type_name(config: &BridgeConfig, content_type: &str) -> Option<String> {
    if let Some(name) = config.type_name_overrides.get(content_type) {
        if name.is_empty() {
            return None;
        }
        return Some(name.clone());
    }
    if let Some(name) = BUILTIN_TYPE_NAMES.get(content_type) {
        return Some((*name).to_string());
    }
    let name = to_pascal_case(content_type);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
