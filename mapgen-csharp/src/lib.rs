//! C# mapping declarations for mapgen.
//!
//! For every key arity in the configured range this crate emits the same
//! family of declarations: the `IDomain` and `IMapping` interfaces, the
//! `KeyValueTuple` pair type and four mapping implementations (delegate
//! backed, dictionary backed, lazy and weakly cached lazy). The output of a
//! default [`mapgen_manifest::Manifest`] is the historical `Mapping.cs`.

mod catalogue;
mod files;
mod generator;
mod keys;
mod support;

pub use catalogue::DECLARATIONS;
pub use files::SourceFile;
pub use generator::{GenerateReport, Generator, PreviewFile, WrittenFile};
pub use keys::KeyShape;
pub use support::{CLEANUP_INTERVAL_MS, SUPPORT_USINGS};
