//! `IDomain`, `IKeyValueTuple` and `KeyValueTuple`.

use std::io::Write;

use mapgen_codegen::{Result, Session};

use super::getter;
use crate::KeyShape;

pub(super) fn emit_domain<W: Write>(s: &mut Session<W>) -> Result<()> {
    s.block(
        "public interface IDomain<$TKeys$> : IEnumerable<$Tuple<TKeys>$>",
        |s| {
            s.stmt("bool Contains($TKeys keys$)")?;
            s.block("int Count", |s| s.stmt("get"))?;
            s.block("bool IsFinite", |s| s.stmt("get"))?;
            s.block("bool IsNumerable", |s| s.stmt("get"))
        },
    )
}

pub(super) fn emit_key_value_tuple_interface<W: Write>(
    s: &mut Session<W>,
    shape: &KeyShape,
) -> Result<()> {
    s.block("public interface IKeyValueTuple<$TKeys$, out TValue>", |s| {
        for (ty, property) in shape.type_params().iter().zip(shape.properties()) {
            s.block(&format!("{ty} {property}"), |s| s.stmt("get"))?;
        }
        s.block("TValue Value", |s| s.stmt("get"))
    })
}

pub(super) fn emit_key_value_tuple<W: Write>(s: &mut Session<W>, shape: &KeyShape) -> Result<()> {
    s.block(
        "public struct KeyValueTuple<$TKeys$, TValue> : IKeyValueTuple<$TKeys$, TValue>",
        |s| {
            s.stmt("KeyValuePair<$Tuple<TKeys>$, TValue> inner")?;
            s.block(
                "public KeyValueTuple(KeyValuePair<$Tuple<TKeys>$, TValue> inner)",
                |s| s.stmt("this.inner = inner"),
            )?;

            let components = shape.type_params().iter().zip(shape.properties());
            for (i, (ty, property)) in components.enumerate() {
                let source = if shape.is_tuple() {
                    format!("inner.Key.Item{}", i + 1)
                } else {
                    "inner.Key".to_string()
                };
                getter(s, &format!("public {ty} {property}"), &source)?;
            }
            getter(s, "public TValue Value", "inner.Value")
        },
    )
}
