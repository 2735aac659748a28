//! Key shapes: the names a declaration of arity N uses for its keys.

use mapgen_codegen::Scope;
use mapgen_core::CSHARP_NAMING;

/// Type parameter, parameter and property names for one arity.
///
/// Arity 1 uses the bare base name (`TKey key`, `Key`); larger arities number
/// every component starting at 1 (`TKey1 key1`, `Key1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyShape {
    type_params: Vec<String>,
    params: Vec<String>,
    properties: Vec<String>,
    comparers: Vec<String>,
}

impl KeyShape {
    /// Shape for `arity` keys named after `base` (e.g. `"key"`).
    pub fn new(arity: u8, base: &str) -> Self {
        let names: Vec<(String, String)> = if arity == 1 {
            vec![(base.to_string(), "comparer".to_string())]
        } else {
            (1..=arity)
                .map(|i| (format!("{base}{i}"), format!("comparer{i}")))
                .collect()
        };

        let mut shape = Self {
            type_params: Vec::with_capacity(names.len()),
            params: Vec::with_capacity(names.len()),
            properties: Vec::with_capacity(names.len()),
            comparers: Vec::with_capacity(names.len()),
        };
        for (name, comparer) in names {
            shape
                .type_params
                .push(format!("T{}", (CSHARP_NAMING.to_type)(&name)));
            shape.params.push(CSHARP_NAMING.local_name(&name));
            shape.properties.push(CSHARP_NAMING.type_name(&name));
            shape.comparers.push(comparer);
        }
        shape
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether keys are packed into a `Tuple` for storage.
    pub fn is_tuple(&self) -> bool {
        self.arity() > 1
    }

    pub fn type_params(&self) -> &[String] {
        &self.type_params
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    pub fn comparers(&self) -> &[String] {
        &self.comparers
    }

    /// The placeholder bindings every declaration of this arity is emitted under.
    pub fn scope(&self) -> Scope {
        let type_params = self.type_params.join(", ");
        let params = self.params.join(", ");
        let comparer_types: Vec<String> = self
            .type_params
            .iter()
            .map(|t| format!("IEqualityComparer<{t}>"))
            .collect();

        let (tuple, keytuple) = if self.is_tuple() {
            (
                format!("Tuple<{type_params}>"),
                "new $Tuple<TKeys>$($keys$)".to_string(),
            )
        } else {
            (type_params.clone(), params.clone())
        };

        Scope::new()
            .bind("TKeys", type_params)
            .bind("TKeys keys", join_pairs(&self.type_params, &self.params))
            .bind("Tuple<TKeys>", tuple)
            .bind("keytuple", keytuple)
            .bind("keys", params)
            .bind("IEqualityComparer<TKeys>", comparer_types.join(", "))
            .bind(
                "IEqualityComparer<TKeys> comparers",
                join_pairs(&comparer_types, &self.comparers),
            )
            .bind("comparers", self.comparers.join(", "))
    }
}

/// `"A a, B b"` from `[A, B]` and `[a, b]`.
fn join_pairs(types: &[String], names: &[String]) -> String {
    types
        .iter()
        .zip(names)
        .map(|(t, n)| format!("{t} {n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use mapgen_codegen::Resolver;

    use super::*;

    fn resolve(shape: &KeyShape, template: &str) -> String {
        let mut resolver = Resolver::new();
        resolver.push(shape.scope());
        resolver.resolve(template).unwrap()
    }

    #[test]
    fn test_arity_one_uses_bare_names() {
        let shape = KeyShape::new(1, "key");
        assert_eq!(shape.type_params(), ["TKey"]);
        assert_eq!(shape.params(), ["key"]);
        assert_eq!(shape.properties(), ["Key"]);
        assert_eq!(shape.comparers(), ["comparer"]);
        assert!(!shape.is_tuple());
    }

    #[test]
    fn test_arity_three_numbers_components() {
        let shape = KeyShape::new(3, "key");
        assert_eq!(shape.type_params(), ["TKey1", "TKey2", "TKey3"]);
        assert_eq!(shape.params(), ["key1", "key2", "key3"]);
        assert_eq!(shape.properties(), ["Key1", "Key2", "Key3"]);
        assert!(shape.is_tuple());
    }

    #[test]
    fn test_arity_one_bindings() {
        let shape = KeyShape::new(1, "key");
        assert_eq!(resolve(&shape, "$TKeys$"), "TKey");
        assert_eq!(resolve(&shape, "$TKeys keys$"), "TKey key");
        assert_eq!(resolve(&shape, "$Tuple<TKeys>$"), "TKey");
        assert_eq!(resolve(&shape, "$keytuple$"), "key");
        assert_eq!(resolve(&shape, "$keys$"), "key");
        assert_eq!(
            resolve(&shape, "$IEqualityComparer<TKeys> comparers$"),
            "IEqualityComparer<TKey> comparer"
        );
        assert_eq!(resolve(&shape, "$comparers$"), "comparer");
    }

    #[test]
    fn test_arity_two_bindings() {
        let shape = KeyShape::new(2, "key");
        assert_eq!(resolve(&shape, "$TKeys$"), "TKey1, TKey2");
        assert_eq!(resolve(&shape, "$TKeys keys$"), "TKey1 key1, TKey2 key2");
        assert_eq!(resolve(&shape, "$Tuple<TKeys>$"), "Tuple<TKey1, TKey2>");
        assert_eq!(
            resolve(&shape, "$keytuple$"),
            "new Tuple<TKey1, TKey2>(key1, key2)"
        );
        assert_eq!(
            resolve(&shape, "$IEqualityComparer<TKeys>$"),
            "IEqualityComparer<TKey1>, IEqualityComparer<TKey2>"
        );
        assert_eq!(resolve(&shape, "$comparers$"), "comparer1, comparer2");
    }

    #[test]
    fn test_custom_base_name() {
        let shape = KeyShape::new(2, "id");
        assert_eq!(resolve(&shape, "$TKeys keys$"), "TId1 id1, TId2 id2");
        assert_eq!(shape.properties(), ["Id1", "Id2"]);
    }

    #[test]
    fn test_reserved_parameter_is_escaped() {
        let shape = KeyShape::new(1, "base");
        assert_eq!(shape.params(), ["@base"]);
        assert_eq!(shape.type_params(), ["TBase"]);
        assert_eq!(shape.properties(), ["Base"]);
    }

    #[test]
    fn test_scope_binds_exactly_the_catalogue_names() {
        let names: Vec<_> = KeyShape::new(2, "key")
            .scope()
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();
        assert_eq!(
            names,
            [
                "TKeys",
                "TKeys keys",
                "Tuple<TKeys>",
                "keytuple",
                "keys",
                "IEqualityComparer<TKeys>",
                "IEqualityComparer<TKeys> comparers",
                "comparers",
            ]
        );
    }
}
