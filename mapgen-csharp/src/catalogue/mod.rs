//! The declaration catalogue emitted for every key arity.
//!
//! Every template is written against the arity scope from
//! [`KeyShape::scope`], so a single template serves all arities. Text that
//! varies per key component (numbered tuple items, per-component comparers)
//! is built from the [`KeyShape`] directly.

mod dictionary;
mod domain;
mod lazy;
mod mapping;

use std::io::Write;

use mapgen_codegen::{Result, Session};

use crate::KeyShape;

/// Declarations in emission order.
pub const DECLARATIONS: &[&str] = &[
    "IDomain",
    "IKeyValueTuple",
    "KeyValueTuple",
    "IMapping",
    "Mapping",
    "DictionaryMapping",
    "LazyMapping",
    "WeakLazyMapping",
];

/// Emit the whole catalogue for one key shape.
pub fn emit<W: Write>(s: &mut Session<W>, shape: &KeyShape) -> Result<()> {
    s.with_scope(shape.scope(), |s| {
        domain::emit_domain(s)?;
        domain::emit_key_value_tuple_interface(s, shape)?;
        domain::emit_key_value_tuple(s, shape)?;
        mapping::emit_mapping_interface(s)?;
        mapping::emit_mapping(s)?;
        dictionary::emit_dictionary_mapping(s, shape)?;
        lazy::emit_lazy_mapping(s)?;
        lazy::emit_weak_lazy_mapping(s)
    })
}

/// `throw new Exception("...")` for members a non-enumerable domain cannot support.
pub(crate) fn throw<W: Write>(s: &mut Session<W>, message: &str) -> Result<()> {
    s.stmt(&format!("throw new Exception(\"{message}\")"))
}

/// A read-only property whose getter returns `value`.
pub(crate) fn getter<W: Write>(s: &mut Session<W>, header: &str, value: &str) -> Result<()> {
    s.block(header, |s| s.block("get", |s| s.stmt(&format!("return {value}"))))
}

/// The three enumerators every mapping exposes, all throwing.
pub(crate) fn non_numerable_enumerators<W: Write>(s: &mut Session<W>) -> Result<()> {
    s.block(
        "public IEnumerator<IKeyValueTuple<$TKeys$, TValue>> GetEnumerator()",
        |s| throw(s, "Domain is non-numerable"),
    )?;
    s.block(
        "IEnumerator<$Tuple<TKeys>$> IEnumerable<$Tuple<TKeys>$>.GetEnumerator()",
        |s| throw(s, "Domain is non-numerable"),
    )?;
    s.block("IEnumerator IEnumerable.GetEnumerator()", |s| {
        throw(s, "Domain is non-numerable")
    })
}
