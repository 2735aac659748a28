//! Generation engine for mapgen.
//!
//! The engine knows nothing about what it emits. It provides:
//!
//! - [`Writer`] - indented line output to a sink
//! - [`Scope`] / [`Resolver`] - `$name$` placeholders resolved against a
//!   stack of scopes, innermost first
//! - [`Session`] - the block model on top of both: blocks that close
//!   themselves when a sibling follows or their enclosing block ends
//! - [`testing`] - test helpers (feature-gated)

mod block;
mod error;
mod indent;
mod placeholder;
mod session;
mod writer;

pub use block::PendingBlock;
pub use error::{Error, Result};
pub use indent::{BraceStyle, Indent};
pub use placeholder::{MAX_EXPANSIONS, Resolver, Scope};
pub use session::{Session, SessionOptions, render};
pub use writer::Writer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
