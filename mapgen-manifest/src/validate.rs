//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use mapgen_core::CSHARP_NAMING;
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Wraps the [`SourceContext`] together with the table currently being
/// validated, so errors can say where a bad value came from.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "mapgen.toml").push("csharp");
/// ctx.validate_dotted_name("Reynolds.Mappings", "namespace")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a table name and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get a context description for error messages.
    ///
    /// For example: "key in 'csharp'" or just "key" if no table was pushed.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path.join("."))
        }
    }

    /// Span of the value assigned to `key`.
    pub fn key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key)
    }

    /// Span of a quoted string value, falling back to the assignment of `key`.
    pub fn value_span(&self, value: &str, key: &str) -> Option<SourceSpan> {
        find_string_span(self.source.src(), value).or_else(|| self.key_span(key))
    }

    /// Validate a plain C# identifier such as a key base name.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.value_span(name, kind),
            ));
        }
        Ok(())
    }

    /// Validate a dotted C# name such as a namespace or a using directive.
    pub fn validate_dotted_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_dotted_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.value_span(name, kind),
            ));
        }
        Ok(())
    }
}

/// Find the span of the value assigned to `key` in the TOML source.
///
/// Matches `key = value` and `key=value` at the start of a line; the span
/// covers the value up to a trailing comment.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let rest = &line[indent..];
        if let Some(after_key) = rest.strip_prefix(key) {
            let after_ws = after_key.trim_start();
            if let Some(after_eq) = after_ws.strip_prefix('=') {
                let value = after_eq.trim_start();
                let start = offset + line.len() - value.len();
                let value = value.split('#').next().unwrap_or(value).trim_end();
                return Some(SourceSpan::from((start, value.len())));
            }
        }
        offset += line.len();
    }
    None
}

/// Find the span of a quoted string in the TOML source, excluding the quotes.
pub(crate) fn find_string_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Validate that a name is a C# identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Validate a dotted name: every segment is an identifier and not a C# keyword.
pub(crate) fn validate_dotted_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    for segment in name.split('.') {
        if segment.is_empty() {
            return Some("name cannot contain empty segments");
        }
        if let Some(reason) = validate_identifier(segment) {
            return Some(reason);
        }
        if CSHARP_NAMING.is_reserved(segment) {
            return Some("segment is a reserved C# keyword");
        }
    }

    None
}
