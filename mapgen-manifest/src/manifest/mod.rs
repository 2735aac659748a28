//! Manifest types and parsing for mapgen.toml files.

mod csharp;
mod file;
mod output;
mod parse;

use mapgen_core::ArityRange;
use serde::Deserialize;

pub use csharp::{CsharpConfig, DEFAULT_KEY, DEFAULT_NAMESPACE, DEFAULT_USINGS};
pub use file::MapgenToml;
pub use output::{BracePlacement, DEFAULT_OUTPUT_PATH, IndentStyle, OutputConfig};

/// File name of the support file emitted next to the main file.
pub const SUPPORT_FILE_NAME: &str = "WeakMapping.cs";

/// Content written by `mapgen init`. Parses to [`Manifest::default`].
pub const DEFAULT_MANIFEST: &str = r#"[output]
path = "Mapping.cs"        # main file, relative to the output directory
indent = "tab"             # "tab" or a space count: 2, 4, 8
brace_style = "next-line"  # or "same-line"
support = true             # also emit WeakMapping.cs

[arity]
min = 1
max = 5

[csharp]
namespace = "Reynolds.Mappings"
usings = ["System", "System.Collections", "System.Collections.Generic", "System.Threading", "System.Linq"]
key = "key"
"#;

/// Root manifest for mapgen.toml
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    pub output: OutputConfig,
    /// Key arities to generate declarations for
    pub arity: ArityRange,
    pub csharp: CsharpConfig,
}

/// Manifest as written, before the arity bounds are checked.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawManifest {
    output: OutputConfig,
    arity: RawArity,
    csharp: CsharpConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawArity {
    min: u8,
    max: u8,
}

impl Default for RawArity {
    fn default() -> Self {
        let range = ArityRange::default();
        Self {
            min: range.min(),
            max: range.max(),
        }
    }
}
