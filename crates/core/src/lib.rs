//! pscalc - PostScript calculator engine for PDF Type 4 functions.
//!
//! Parses the restricted PostScript dialect used by Type 4 function streams
//! and evaluates it on a fixed-capacity float stack.

pub mod error;
pub mod function;
pub mod interp;
pub mod parser;

// Re-export main types for convenience
pub use function::{Interval, PSFunction};
pub use interp::{MAX_PARSE_DEPTH, Opcode, Operation, PS_STACK_SIZE, PSEngine, Procedure};
pub use parser::PSWordParser;

pub use error::{PsError, Result};
