// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! `mapgen.toml` parsing and validation.
//!
//! ```
//! use mapgen_manifest::Manifest;
//!
//! let manifest: Manifest = "[arity]\nmax = 3\n".parse().unwrap();
//! assert_eq!(manifest.arity.to_string(), "1..=3");
//! assert_eq!(manifest.csharp.namespace, "Reynolds.Mappings");
//! ```

mod error;
mod manifest;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    BracePlacement, CsharpConfig, DEFAULT_KEY, DEFAULT_MANIFEST, DEFAULT_NAMESPACE,
    DEFAULT_OUTPUT_PATH, DEFAULT_USINGS, IndentStyle, Manifest, MapgenToml, OutputConfig,
    SUPPORT_FILE_NAME,
};
pub use validate::ParseContext;
