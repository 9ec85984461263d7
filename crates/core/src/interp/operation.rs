//! A single parsed instruction and the word classifier that produces it.

use super::engine::PSEngine;
use super::opcode::Opcode;
use super::procedure::Procedure;
use crate::error::Result;
use crate::parser::number::{format_number, parse_number};

/// One instruction of a calculator program.
///
/// A pure tree: `Proc` owns its nested procedure, and nothing points back up.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// A primitive operator (never `Proc` or `Const`)
    Operator(Opcode),
    /// A numeric literal
    Const(f32),
    /// A `{ ... }` block, executed only through `if`/`ifelse`
    Proc(Box<Procedure>),
}

/// Classification of a single word from the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WordKind {
    OpenBrace,
    CloseBrace,
    Operator(Opcode),
    Number(f32),
    /// Neither a number nor a known operator; evaluates as `0`
    Fallback,
}

impl WordKind {
    pub fn classify(word: &[u8]) -> Self {
        match word {
            b"{" => WordKind::OpenBrace,
            b"}" => WordKind::CloseBrace,
            _ => {
                if let Some(op) = Opcode::from_name(word) {
                    WordKind::Operator(op)
                } else if let Some(value) = parse_number(word) {
                    WordKind::Number(value)
                } else {
                    WordKind::Fallback
                }
            }
        }
    }
}

impl Operation {
    /// Builds the operation for a non-brace word.
    ///
    /// Unknown operators and malformed numbers both become `Const(0.0)`.
    pub fn from_word(word: &[u8]) -> Self {
        match WordKind::classify(word) {
            WordKind::Operator(op) => Operation::Operator(op),
            WordKind::Number(value) => Operation::Const(value),
            WordKind::OpenBrace | WordKind::CloseBrace | WordKind::Fallback => {
                tracing::trace!(word = %String::from_utf8_lossy(word), "unrecognized word, using 0");
                Operation::Const(0.0)
            }
        }
    }

    /// The instruction tag: the operator itself, or `Proc`/`Const`.
    pub fn opcode(&self) -> Opcode {
        match self {
            Operation::Operator(op) => *op,
            Operation::Const(_) => Opcode::Const,
            Operation::Proc(_) => Opcode::Proc,
        }
    }

    /// Literal value of a `Const` operation.
    pub fn value(&self) -> Option<f32> {
        match self {
            Operation::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Nested procedure of a `Proc` operation.
    pub fn procedure(&self) -> Option<&Procedure> {
        match self {
            Operation::Proc(proc) => Some(proc),
            _ => None,
        }
    }

    /// Executes this operation in isolation.
    ///
    /// A `Proc` reached here is inert; conditionals are resolved by
    /// [`Procedure::execute`], which can see the preceding operations.
    pub fn execute(&self, engine: &mut PSEngine) -> Result<()> {
        match self {
            Operation::Const(value) => {
                engine.push(*value);
                Ok(())
            }
            Operation::Proc(_) => Ok(()),
            Operation::Operator(op) => engine.do_operator(*op),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Operator(op) => write!(f, "{op}"),
            Operation::Const(value) => f.write_str(&format_number(*value)),
            Operation::Proc(proc) => write!(f, "{proc}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(WordKind::classify(b"{"), WordKind::OpenBrace);
        assert_eq!(WordKind::classify(b"}"), WordKind::CloseBrace);
        assert_eq!(WordKind::classify(b"dup"), WordKind::Operator(Opcode::Dup));
        assert_eq!(WordKind::classify(b"-2.5"), WordKind::Number(-2.5));
        assert_eq!(WordKind::classify(b"1e3"), WordKind::Fallback);
        assert_eq!(WordKind::classify(b"Dup"), WordKind::Fallback);
    }

    #[test]
    fn test_fallback_is_zero_const() {
        let op = Operation::from_word(b"moveto");
        assert_eq!(op.opcode(), Opcode::Const);
        assert_eq!(op.value(), Some(0.0));
    }
}
