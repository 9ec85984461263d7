//! Error types for the pscalc PostScript calculator engine.

use thiserror::Error;

use crate::interp::opcode::Opcode;

/// Primary error type for parsing and evaluating calculator programs.
///
/// Malformed tokens never produce an error: they degrade to the literal `0`.
/// Only structural problems are reported here.
#[derive(Error, Debug)]
pub enum PsError {
    #[error("procedure nesting exceeds maximum depth at depth {depth}")]
    DepthExceeded { depth: usize },

    #[error("program must begin with `{{` (found at position {pos})")]
    MissingOpenBrace { pos: usize },

    #[error("unexpected end of input at position {pos}: unclosed procedure")]
    UnexpectedEof { pos: usize },

    #[error("program already parsed")]
    AlreadyParsed,

    #[error("`{}` is not preceded by the procedure(s) it requires", .0.name())]
    MissingProcedure(Opcode),

    #[error("invalid function: {0}")]
    InvalidFunction(String),

    #[error("function expects {expected} inputs, got {got}")]
    InputCount { expected: usize, got: usize },

    #[error("stack underflow: expected {expected} results, got {got}")]
    StackUnderflow { expected: usize, got: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for PsError.
pub type Result<T> = std::result::Result<T, PsError>;
