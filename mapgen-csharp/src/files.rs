//! The source files a generation run produces.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use mapgen_codegen::{Result, Session};
use mapgen_manifest::{Manifest, SUPPORT_FILE_NAME};

use crate::{KeyShape, catalogue, support};

/// A generated C# source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFile {
    /// The catalogue for every configured arity
    Mapping,
    /// The `WeakMapping` base class
    Support,
}

impl SourceFile {
    /// Path relative to the output directory.
    pub fn path(&self, manifest: &Manifest) -> PathBuf {
        let main = &manifest.output.path;
        match self {
            Self::Mapping => main.clone(),
            Self::Support => main
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(SUPPORT_FILE_NAME),
        }
    }

    /// Emit the file's content into an active session.
    pub fn emit<W: Write>(&self, s: &mut Session<W>, manifest: &Manifest) -> Result<()> {
        match self {
            Self::Mapping => {
                let usings: Vec<&str> = manifest.csharp.usings.iter().map(String::as_str).collect();
                emit_namespace(s, &usings, &manifest.csharp.namespace, |s| {
                    for arity in manifest.arity {
                        catalogue::emit(s, &KeyShape::new(arity, &manifest.csharp.key))?;
                    }
                    Ok(())
                })
            }
            Self::Support => emit_namespace(
                s,
                support::SUPPORT_USINGS,
                &manifest.csharp.namespace,
                support::emit_weak_mapping,
            ),
        }
    }
}

fn emit_namespace<W, F>(s: &mut Session<W>, usings: &[&str], namespace: &str, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut Session<W>) -> Result<()>,
{
    for using in usings {
        s.stmt(&format!("using {using}"))?;
    }
    s.block(&format!("namespace {namespace}"), body)
}
