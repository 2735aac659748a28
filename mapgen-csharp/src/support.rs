//! `WeakMapping`: the base class of every `WeakLazyMapping`.
//!
//! Weak mappings register themselves in a shared list; a low-priority
//! background thread sweeps the list and lets each live mapping drop entries
//! whose values were collected.

use std::io::Write;

use mapgen_codegen::{Result, Session};

/// `using` directives of the support file.
pub const SUPPORT_USINGS: &[&str] = &[
    "System",
    "System.Collections.Generic",
    "System.Linq",
    "System.Text",
    "System.Threading",
];

/// Milliseconds the cleanup thread sleeps between sweeps.
pub const CLEANUP_INTERVAL_MS: u32 = 30;

pub(crate) fn emit_weak_mapping<W: Write>(s: &mut Session<W>) -> Result<()> {
    s.block("public abstract class WeakMapping", |s| {
        s.stmt("protected abstract void Cleanup()")?;
        s.stmt("static Thread cleanupThread")?;
        s.stmt("static List<WeakReference> containers = null")?;
        s.block("protected static List<WeakReference> Containers", |s| {
            s.block("get", |s| {
                s.block("if(containers == null)", |s| {
                    s.stmt("containers = new List<WeakReference>()")
                })?;
                s.stmt("return containers")
            })
        })?;
        s.block(
            "protected static void AddToCleanupList(WeakMapping container)",
            |s| {
                s.block("lock(Containers)", |s| {
                    s.stmt("Containers.Add(new WeakReference(container))")?;
                    s.block("if(cleanupThread == null)", |s| {
                        s.stmt("cleanupThread = new Thread(CleanupLoop)")?;
                        s.stmt("cleanupThread.Priority = ThreadPriority.BelowNormal")?;
                        s.stmt("cleanupThread.IsBackground = true")?;
                        s.stmt("cleanupThread.Start()")
                    })
                })
            },
        )?;
        s.block("static void CleanupLoop()", |s| {
            s.stmt("WeakMapping container")?;
            s.block("while(true)", |s| {
                s.stmt(&format!("Thread.Sleep({CLEANUP_INTERVAL_MS})"))?;
                s.stmt("int k = 0")?;
                s.block("while(k < containers.Count)", |s| {
                    s.block("lock(containers)", |s| {
                        s.stmt("container = containers[k].Target as WeakMapping")?;
                        s.block("if(container == null)", |s| {
                            s.stmt("containers.RemoveAt(k)")
                        })?;
                        s.block("else", |s| {
                            s.stmt("container.Cleanup()")?;
                            s.stmt("k++")
                        })
                    })
                })
            })
        })
    })
}
