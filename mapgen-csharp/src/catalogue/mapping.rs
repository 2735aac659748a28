//! `IMapping` and the delegate-backed `Mapping`.

use std::io::Write;

use mapgen_codegen::{Result, Session};

use super::{getter, non_numerable_enumerators, throw};

pub(super) fn emit_mapping_interface<W: Write>(s: &mut Session<W>) -> Result<()> {
    s.block(
        "public interface IMapping<$TKeys$, out TValue> : IEnumerable<IKeyValueTuple<$TKeys$, TValue>>, IDomain<$TKeys$>",
        |s| {
            s.block("TValue this[$TKeys keys$]", |s| s.stmt("get"))?;
            s.stmt("IEnumerator<IKeyValueTuple<$TKeys$, TValue>> GetEnumerator()")
        },
    )
}

pub(super) fn emit_mapping<W: Write>(s: &mut Session<W>) -> Result<()> {
    s.block(
        "public class Mapping<$TKeys$, TValue> : IMapping<$TKeys$, TValue>",
        |s| {
            s.stmt("public delegate TValue GetDelegate($TKeys keys$)")?;
            s.stmt("GetDelegate _getter")?;
            s.block("public Mapping(GetDelegate getter)", |s| {
                s.stmt("_getter = getter")
            })?;
            getter(s, "public TValue this[$TKeys keys$]", "_getter($keys$)")?;
            getter(s, "public bool IsFinite", "false")?;
            getter(s, "public bool IsNumerable", "false")?;
            s.block("public bool Contains($TKeys keys$)", |s| s.stmt("return true"))?;
            s.block("public int Count", |s| {
                s.block("get", |s| throw(s, "Domain is not finite"))
            })?;
            non_numerable_enumerators(s)
        },
    )
}
