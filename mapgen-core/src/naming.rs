//! Naming conventions for the generated C# sources.

use crate::{to_camel_case, to_pascal_case};

/// Language-specific naming conventions.
///
/// Defines how to turn a plain phrase into type, parameter and member names,
/// and how to handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a phrase to a type or member name (e.g., "key" -> "Key")
    pub to_type: fn(&str) -> String,
    /// Transform a phrase to a parameter or local name (e.g., "key" -> "key")
    pub to_local: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "base" -> "@base" in C#)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type or member name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a parameter name.
    pub fn local_name(&self, name: &str) -> String {
        let transformed = (self.to_local)(name);
        self.safe_name(&transformed)
    }
}

fn escape_verbatim(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming conventions.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_local: to_camel_case,
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
        "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
        "void", "volatile", "while",
    ],
    escape_reserved: escape_verbatim,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csharp_type_name() {
        assert_eq!(CSHARP_NAMING.type_name("key"), "Key");
        assert_eq!(CSHARP_NAMING.type_name("lazy mapping"), "LazyMapping");
    }

    #[test]
    fn test_csharp_local_name() {
        assert_eq!(CSHARP_NAMING.local_name("key"), "key");
        assert_eq!(CSHARP_NAMING.local_name("Row Key"), "rowKey");
    }

    #[test]
    fn test_csharp_reserved_words() {
        assert!(CSHARP_NAMING.is_reserved("base"));
        assert!(CSHARP_NAMING.is_reserved("lock"));
        assert!(!CSHARP_NAMING.is_reserved("key"));
    }

    #[test]
    fn test_csharp_escape_reserved() {
        assert_eq!(CSHARP_NAMING.local_name("base"), "@base");
        assert_eq!(CSHARP_NAMING.local_name("Base"), "@base");
        assert_eq!(CSHARP_NAMING.safe_name("value"), "value");
    }
}
