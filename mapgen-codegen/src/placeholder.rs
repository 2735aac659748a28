//! Placeholder substitution against a stack of named scopes.
//!
//! A placeholder is a name enclosed in `$` on both sides, e.g. `$TKeys$`.
//! Names may contain anything except `$` itself, so template authors can use
//! readable names such as `$TKeys keys$` or `$IEqualityComparer<TKeys>$`.

use std::ops::Range;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::{Error, Result};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$([^$]+)\$").unwrap());

/// Substitutions allowed per text beyond one for each placeholder it starts with.
///
/// Splicing can join a `$` from a value with one from the surrounding text
/// into a new placeholder; this caps how often that may happen.
pub const MAX_EXPANSIONS: usize = 1024;

/// An ordered set of placeholder bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    bindings: IndexMap<String, String>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding of `name`.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name` to `value` in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Look up the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    /// Iterate over bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Scope
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Resolves placeholders, innermost scope first.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    scopes: Vec<Scope>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a scope on top of the stack.
    pub fn push(&mut self, scope: Scope) {
        trace!(bindings = scope.len(), depth = self.scopes.len() + 1, "push scope");
        self.scopes.push(scope);
    }

    /// Pop the innermost scope.
    pub fn pop(&mut self) -> Option<Scope> {
        let scope = self.scopes.pop();
        trace!(depth = self.scopes.len(), "pop scope");
        scope
    }

    /// Number of live scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Find the value of `name` in the innermost scope that binds it.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Replace every placeholder in `template` until none remain.
    ///
    /// After each substitution the text is scanned again from the start, so
    /// values may themselves contain placeholders. A bound value is resolved
    /// before it is spliced in; a name that reappears while its own value is
    /// being resolved is a cycle. Text without placeholders comes back
    /// unchanged.
    pub fn resolve(&self, template: &str) -> Result<String> {
        self.expand(template, template, &mut Vec::new())
    }

    fn expand(&self, text: &str, template: &str, active: &mut Vec<String>) -> Result<String> {
        let mut text = text.to_string();
        let budget = PLACEHOLDER.find_iter(&text).count() + MAX_EXPANSIONS;
        let mut expansions = 0;

        while let Some((range, name)) = next_placeholder(&text) {
            if expansions == budget || active.contains(&name) {
                return Err(Error::RecursiveExpansion {
                    name,
                    template: template.to_string(),
                });
            }

            let value = self
                .lookup(&name)
                .ok_or_else(|| Error::UnresolvedPlaceholder {
                    name: name.clone(),
                    template: template.to_string(),
                })?;

            active.push(name);
            let value = self.expand(value, template, active);
            active.pop();

            text.replace_range(range, &value?);
            expansions += 1;
        }

        Ok(text)
    }
}

/// Byte range and name of the leftmost well-formed placeholder.
fn next_placeholder(text: &str) -> Option<(Range<usize>, String)> {
    let caps = PLACEHOLDER.captures(text)?;
    Some((caps.get(0)?.range(), caps.get(1)?.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(scopes: impl IntoIterator<Item = Scope>) -> Resolver {
        let mut resolver = Resolver::new();
        for scope in scopes {
            resolver.push(scope);
        }
        resolver
    }

    #[test]
    fn test_text_without_placeholders_is_unchanged() {
        let resolver = Resolver::new();
        for text in ["", "int Count", "a $ b", "price: $5", "$$"] {
            assert_eq!(resolver.resolve(text).unwrap(), text);
        }
    }

    #[test]
    fn test_single_substitution() {
        let resolver = resolver([Scope::new().bind("TKeys", "TKey1, TKey2")]);
        assert_eq!(
            resolver.resolve("public interface IDomain<$TKeys$>").unwrap(),
            "public interface IDomain<TKey1, TKey2>"
        );
    }

    #[test]
    fn test_names_with_spaces_and_punctuation() {
        let resolver = resolver([Scope::new()
            .bind("TKeys keys", "TKey key")
            .bind("IEqualityComparer<TKeys>", "IEqualityComparer<TKey>")]);
        assert_eq!(
            resolver
                .resolve("bool Contains($TKeys keys$, $IEqualityComparer<TKeys>$ c)")
                .unwrap(),
            "bool Contains(TKey key, IEqualityComparer<TKey> c)"
        );
    }

    #[test]
    fn test_nested_substitution_across_scopes() {
        let resolver = resolver([
            Scope::new().bind("inner", "X"),
            Scope::new().bind("name", "A$inner$B"),
        ]);
        assert_eq!(resolver.resolve("$name$").unwrap(), "AXB");
    }

    #[test]
    fn test_innermost_scope_wins() {
        let mut resolver = resolver([Scope::new().bind("k", "1")]);
        resolver.push(Scope::new().bind("k", "2"));
        assert_eq!(resolver.resolve("$k$").unwrap(), "2");

        resolver.pop();
        assert_eq!(resolver.resolve("$k$").unwrap(), "1");
    }

    #[test]
    fn test_outer_binding_visible_through_inner_scope() {
        let resolver = resolver([
            Scope::new().bind("outer", "o"),
            Scope::new().bind("inner", "i"),
        ]);
        assert_eq!(resolver.resolve("$outer$/$inner$").unwrap(), "o/i");
    }

    #[test]
    fn test_unbound_name_fails_with_name() {
        let resolver = resolver([Scope::new().bind("k", "1")]);
        let err = resolver.resolve("get $missing name$").unwrap_err();
        match err {
            Error::UnresolvedPlaceholder { name, template } => {
                assert_eq!(name, "missing name");
                assert_eq!(template, "get $missing name$");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unresolved_message_names_token() {
        let err = Resolver::new().resolve("$Key$").unwrap_err();
        assert!(err.to_string().contains("$Key$"));
    }

    #[test]
    fn test_self_referential_value_is_rejected() {
        let resolver = resolver([Scope::new().bind("loop", "($loop$)")]);
        assert!(matches!(
            resolver.resolve("$loop$"),
            Err(Error::RecursiveExpansion { ref name, .. }) if name == "loop"
        ));
    }

    #[test]
    fn test_indirect_cycle_is_rejected() {
        let resolver = resolver([Scope::new().bind("a", "<$b$>").bind("b", "[$a$]")]);
        assert!(matches!(
            resolver.resolve("x $a$"),
            Err(Error::RecursiveExpansion { ref name, .. }) if name == "a"
        ));
    }

    #[test]
    fn test_many_placeholders_in_one_template() {
        let resolver = resolver([Scope::new().bind("k", "x")]);
        let template = "$k$".repeat(MAX_EXPANSIONS + 76);
        let out = resolver.resolve(&template).unwrap();
        assert_eq!(out, "x".repeat(MAX_EXPANSIONS + 76));
    }

    #[test]
    fn test_repeated_name_in_value_is_not_a_cycle() {
        let resolver = resolver([
            Scope::new().bind("k", "key"),
            Scope::new().bind("pair", "$k$, $k$"),
        ]);
        assert_eq!(resolver.resolve("($pair$) $pair$").unwrap(), "(key, key) key, key");
    }

    #[test]
    fn test_value_may_contain_lone_dollar() {
        let resolver = resolver([Scope::new().bind("cost", "$5")]);
        assert_eq!(resolver.resolve("[$cost$]").unwrap(), "[$5]");
    }

    #[test]
    fn test_scope_from_pairs_keeps_order() {
        let scope: Scope = [("b", "2"), ("a", "1")].into_iter().collect();
        let names: Vec<_> = scope.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(scope.len(), 2);
    }
}
