//! Identifier casing helpers.

/// Split a phrase into words on whitespace, `_` and `-`.
fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|w| !w.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "key value" -> "KeyValue").
///
/// Only the first letter of each word changes; the rest is kept as written.
pub fn to_pascal_case(s: &str) -> String {
    words(s).map(capitalize).collect()
}

/// Convert a string to camelCase (e.g., "key value" -> "keyValue").
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
