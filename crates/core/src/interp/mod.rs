//! PostScript calculator interpreter.
//!
//! - `opcode`: primitive instruction tags and their names
//! - `operation`: one parsed instruction (operator, literal or nested procedure)
//! - `procedure`: operation sequences, including `if`/`ifelse` control flow
//! - `engine`: the operand stack, program parsing and operator dispatch
//! - `ops`: operator implementations grouped by category

pub mod engine;
pub mod opcode;
pub mod operation;
pub mod ops;
pub mod procedure;

pub use engine::{MAX_PARSE_DEPTH, PS_STACK_SIZE, PSEngine};
pub use opcode::Opcode;
pub use operation::{Operation, WordKind};
pub use procedure::Procedure;
