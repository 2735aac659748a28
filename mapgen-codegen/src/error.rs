use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation passes.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a generation pass.
///
/// None of these are recoverable mid-pass: the output written so far must be
/// discarded and the driver or template fixed.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("placeholder '${name}$' is not bound in any live scope")]
    #[diagnostic(
        code(mapgen::unresolved_placeholder),
        help("bind '{name}' in an enclosing scope before emitting: {template}")
    )]
    UnresolvedPlaceholder { name: String, template: String },

    #[error("placeholder '${name}$' keeps expanding into further placeholders")]
    #[diagnostic(
        code(mapgen::recursive_expansion),
        help("the value bound to '{name}' refers back to itself; template: {template}")
    )]
    RecursiveExpansion { name: String, template: String },

    #[error("unbalanced block structure while {construct}")]
    #[diagnostic(code(mapgen::imbalance))]
    Imbalance { construct: String },

    #[error("no output sink is attached")]
    #[diagnostic(
        code(mapgen::sink_unavailable),
        help("call begin() before emitting and do not emit after end()")
    )]
    SinkUnavailable,

    #[error("a generation pass is already active")]
    #[diagnostic(code(mapgen::session_active), help("call end() before starting a new pass"))]
    SessionActive,

    #[error("failed to write generated output")]
    #[diagnostic(code(mapgen::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn imbalance(construct: impl Into<String>) -> Self {
        Error::Imbalance {
            construct: construct.into(),
        }
    }
}
