//! `LazyMapping` and `WeakLazyMapping`: values created on first access.

use std::io::Write;

use mapgen_codegen::{Result, Session};

use super::{getter, non_numerable_enumerators, throw};

pub(super) fn emit_lazy_mapping<W: Write>(s: &mut Session<W>) -> Result<()> {
    s.block(
        "public class LazyMapping<$TKeys$, TValue> : IMapping<$TKeys$, TValue>",
        |s| {
            delegates_and_fields(s, "TValue")?;
            s.block(
                "public LazyMapping(InstantiateDelegate instantiator, ContainsDelegate contains = null)",
                |s| {
                    s.stmt("_inner = new DictionaryMapping<$TKeys$, TValue>()")?;
                    s.stmt("_instantiator = instantiator")?;
                    s.stmt("_contains = contains")
                },
            )?;
            s.block(
                "public LazyMapping(InstantiateDelegate instantiator, ContainsDelegate contains, $IEqualityComparer<TKeys> comparers$)",
                |s| {
                    s.stmt("_inner = new DictionaryMapping<$TKeys$, TValue>($comparers$)")?;
                    s.stmt("_instantiator = instantiator")?;
                    s.stmt("_contains = contains")
                },
            )?;
            infinite_domain(s)?;
            s.block("public TValue this[$TKeys keys$]", |s| {
                s.block("get", |s| {
                    s.stmt("TValue value")?;
                    s.block("if(_inner.TryGetValue($keys$, out value))", |s| {
                        s.stmt("return value")
                    })?;
                    s.block("else", |s| {
                        s.stmt("_inner[$keys$] = value = _instantiator($keys$)")?;
                        s.stmt("return value")
                    })
                })
            })?;
            s.block(
                "public bool TryGetExisting($TKeys keys$, out TValue value)",
                |s| s.stmt("return _inner.TryGetValue($keys$, out value)"),
            )
        },
    )
}

pub(super) fn emit_weak_lazy_mapping<W: Write>(s: &mut Session<W>) -> Result<()> {
    s.block(
        "public class WeakLazyMapping<$TKeys$, TValue> : WeakMapping, IMapping<$TKeys$, TValue> where TValue : class",
        |s| {
            delegates_and_fields(s, "WeakReference")?;
            s.block(
                "public WeakLazyMapping(InstantiateDelegate instantiator, ContainsDelegate contains = null)",
                |s| {
                    s.stmt("_inner = new DictionaryMapping<$TKeys$, WeakReference>()")?;
                    s.stmt("_instantiator = instantiator")?;
                    s.stmt("_contains = contains")?;
                    s.stmt("AddToCleanupList(this)")
                },
            )?;
            s.block(
                "public WeakLazyMapping(InstantiateDelegate instantiator, ContainsDelegate contains, $IEqualityComparer<TKeys> comparers$)",
                |s| {
                    s.stmt("_inner = new DictionaryMapping<$TKeys$, WeakReference>($comparers$)")?;
                    s.stmt("_instantiator = instantiator")?;
                    s.stmt("_contains = contains")
                },
            )?;
            s.block("protected override void Cleanup()", |s| {
                s.stmt("$Tuple<TKeys>$[] keys")?;
                s.block("lock(_inner)", |s| {
                    s.stmt("keys = ((IEnumerable<$Tuple<TKeys>$>) _inner).ToArray()")
                })?;
                s.block("foreach(var key in keys)", |s| {
                    s.block("lock(_inner)", |s| {
                        s.stmt("WeakReference r")?;
                        s.stmt("object v")?;
                        s.block("if(_inner.TryGetValue(key, out r) && !r.IsAlive)", |s| {
                            s.stmt("_inner.Remove(key)")
                        })
                    })
                })
            })?;
            infinite_domain(s)?;
            s.block("public TValue this[$TKeys keys$]", |s| {
                s.block("get", |s| {
                    s.stmt("WeakReference r")?;
                    s.stmt("TValue v")?;
                    s.block("lock(_inner)", |s| {
                        s.block("if(_inner.TryGetValue($keys$, out r))", |s| {
                            s.stmt("v = r.Target as TValue")?;
                            s.block("if(v != null)", |s| s.stmt("return v"))
                        })?;
                        s.stmt("_inner[$keys$] = new WeakReference(v = _instantiator($keys$))")?;
                        s.stmt("return v")
                    })
                })
            })?;
            s.block(
                "public bool TryGetExisting($TKeys keys$, out TValue value)",
                |s| {
                    s.stmt("WeakReference r")?;
                    s.block("lock(_inner)", |s| {
                        s.block("if(_inner.TryGetValue($keys$, out r))", |s| {
                            s.stmt("value = r.Target as TValue")?;
                            s.stmt("return value != null")
                        })?;
                        s.stmt("value = null")?;
                        s.stmt("return false")
                    })
                },
            )
        },
    )
}

/// Delegates, the instantiator and predicate fields and the backing dictionary.
fn delegates_and_fields<W: Write>(s: &mut Session<W>, stored: &str) -> Result<()> {
    s.stmt("public delegate TValue InstantiateDelegate($TKeys keys$)")?;
    s.stmt("public delegate bool ContainsDelegate($TKeys keys$)")?;
    s.stmt("protected InstantiateDelegate _instantiator")?;
    s.stmt("protected ContainsDelegate _contains")?;
    s.stmt(&format!("protected DictionaryMapping<$TKeys$, {stored}> _inner"))
}

/// Members shared by the lazy mappings: an optional predicate, no enumeration.
fn infinite_domain<W: Write>(s: &mut Session<W>) -> Result<()> {
    s.block("public bool Contains($TKeys keys$)", |s| {
        s.block("if(_contains == null)", |s| s.stmt("return true"))?;
        s.block("else", |s| s.stmt("return _contains($keys$)"))
    })?;
    s.block("public int Count", |s| {
        s.block("get", |s| throw(s, "Domain is not finite"))
    })?;
    getter(s, "public bool IsFinite", "false")?;
    getter(s, "public bool IsNumerable", "false")?;
    non_numerable_enumerators(s)
}
