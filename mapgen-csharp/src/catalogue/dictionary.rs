//! `DictionaryMapping`: a finite mapping stored in a `Dictionary`.
//!
//! Multi-key dictionaries store `Tuple` keys, so they carry a nested
//! `EqualityComparer` that combines one comparer per component and expose
//! per-component overloads of the dictionary members.

use std::io::Write;

use mapgen_codegen::{Result, Scope, Session};

use super::getter;
use crate::KeyShape;

pub(super) fn emit_dictionary_mapping<W: Write>(
    s: &mut Session<W>,
    shape: &KeyShape,
) -> Result<()> {
    let base_comparer = if shape.is_tuple() {
        "new EqualityComparer($comparers$)"
    } else {
        "$comparers$"
    };

    s.block(
        "public class DictionaryMapping<$TKeys$, TValue> : Dictionary<$Tuple<TKeys>$, TValue>, IMapping<$TKeys$, TValue>",
        |s| {
            if shape.is_tuple() {
                emit_tuple_comparer(s, shape)?;
            }
            s.block("public bool Contains($TKeys keys$)", |s| {
                s.stmt("return this.ContainsKey($keytuple$)")
            })?;
            getter(s, "public bool IsFinite", "true")?;
            getter(s, "public bool IsNumerable", "true")?;

            s.empty_block("public DictionaryMapping() : base()")?;
            s.with_scope(Scope::new().bind("base comparer", base_comparer), |s| {
                s.empty_block(
                    "public DictionaryMapping($IEqualityComparer<TKeys> comparers$) : base ($base comparer$)",
                )
            })?;

            s.block(
                "public new IEnumerator<IKeyValueTuple<$TKeys$, TValue>> GetEnumerator()",
                |s| {
                    s.block("for(var e = base.GetEnumerator(); e.MoveNext(); )", |s| {
                        s.stmt("yield return new KeyValueTuple<$TKeys$, TValue>(e.Current)")
                    })
                },
            )?;
            s.block(
                "IEnumerator<$Tuple<TKeys>$> IEnumerable<$Tuple<TKeys>$>.GetEnumerator()",
                |s| s.stmt("return this.Keys.GetEnumerator()"),
            )?;
            s.block("IEnumerator IEnumerable.GetEnumerator()", |s| {
                s.stmt("return this.Keys.GetEnumerator()")
            })?;

            if shape.is_tuple() {
                emit_component_overloads(s)?;
            }
            Ok(())
        },
    )
}

/// `EqualityComparer` over the key tuple, one comparer per component.
fn emit_tuple_comparer<W: Write>(s: &mut Session<W>, shape: &KeyShape) -> Result<()> {
    let components: Vec<(usize, &String, &String)> = shape
        .type_params()
        .iter()
        .zip(shape.comparers())
        .enumerate()
        .map(|(i, (ty, comparer))| (i + 1, ty, comparer))
        .collect();

    s.block(
        "protected class EqualityComparer : IEqualityComparer<$Tuple<TKeys>$>",
        |s| {
            for (_, ty, comparer) in &components {
                s.stmt(&format!("IEqualityComparer<{ty}> {comparer}"))?;
            }
            s.block(
                "public EqualityComparer($IEqualityComparer<TKeys> comparers$)",
                |s| {
                    for (_, ty, comparer) in &components {
                        s.stmt(&format!(
                            "this.{comparer} = ({comparer} == null ? EqualityComparer<{ty}>.Default : {comparer})"
                        ))?;
                    }
                    Ok(())
                },
            )?;

            let equal = components
                .iter()
                .map(|(i, _, comparer)| format!("{comparer}.Equals(a.Item{i}, b.Item{i})"))
                .collect::<Vec<_>>()
                .join(" && ");
            s.block(
                "public bool Equals($Tuple<TKeys>$ a, $Tuple<TKeys>$ b)",
                |s| s.stmt(&format!("return {equal}")),
            )?;

            s.block("public int GetHashCode($Tuple<TKeys>$ obj)", |s| {
                s.stmt(&format!("int result = {}", components.len()))?;
                s.block("unchecked", |s| {
                    for (i, _, comparer) in &components {
                        s.stmt(&format!(
                            "result = result * 23 + {comparer}.GetHashCode(obj.Item{i})"
                        ))?;
                    }
                    Ok(())
                })?;
                s.stmt("return result")
            })
        },
    )
}

/// Dictionary members taking the key components instead of a tuple.
fn emit_component_overloads<W: Write>(s: &mut Session<W>) -> Result<()> {
    s.block("public bool ContainsKey($TKeys keys$)", |s| {
        s.stmt("return base.ContainsKey($keytuple$)")
    })?;
    s.block("public bool Remove($TKeys keys$)", |s| {
        s.stmt("return base.Remove($keytuple$)")
    })?;
    s.block("public void Add($TKeys keys$, TValue value)", |s| {
        s.stmt("base.Add($keytuple$, value)")
    })?;
    s.block("public bool TryGetValue($TKeys keys$, out TValue value)", |s| {
        s.stmt("return base.TryGetValue($keytuple$, out value)")
    })?;
    s.block("public TValue this[$TKeys keys$]", |s| {
        s.block("get", |s| s.stmt("return base[$keytuple$]"))?;
        s.block("set", |s| s.stmt("base[$keytuple$] = value"))
    })
}
