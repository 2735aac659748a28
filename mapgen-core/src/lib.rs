//! Core utilities and types for mapgen.
//!
//! This crate provides fundamental types and utilities used across
//! the mapgen crates.

mod arity;
mod file;
mod naming;
mod utils;

pub use arity::{ArityError, ArityRange, DEFAULT_MAX_ARITY, DEFAULT_MIN_ARITY, MAX_TUPLE_ARITY};
// File operations
pub use file::{File, Overwrite, WriteResult};
pub use naming::{CSHARP_NAMING, NamingConvention};
// String utilities
pub use utils::{to_camel_case, to_pascal_case};
