//! Procedures: ordered, nestable operation sequences.

use smallvec::SmallVec;

use super::engine::{MAX_PARSE_DEPTH, PSEngine};
use super::opcode::Opcode;
use super::operation::{Operation, WordKind};
use crate::error::{PsError, Result};
use crate::parser::lexer::PSWordParser;

/// A parsed `{ ... }` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Procedure {
    operations: SmallVec<[Operation; 8]>,
}

impl Procedure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Appends the operation for `word` as if it had been parsed.
    pub fn add_operator(&mut self, word: &[u8]) {
        self.operations.push(Operation::from_word(word));
    }

    pub fn last_operation(&self) -> Option<&Operation> {
        self.operations.last()
    }

    /// Parses words into this procedure up to and including its closing `}`.
    ///
    /// The opening `{` has already been consumed; running out of input
    /// before the matching `}` is an error.
    pub(crate) fn parse(&mut self, parser: &mut PSWordParser<'_>, depth: usize) -> Result<()> {
        if depth >= MAX_PARSE_DEPTH {
            tracing::debug!(depth, pos = parser.tell(), "procedure nesting too deep");
            return Err(PsError::DepthExceeded { depth });
        }
        loop {
            let Some(word) = parser.next_word() else {
                return Err(PsError::UnexpectedEof { pos: parser.tell() });
            };
            match WordKind::classify(word) {
                WordKind::CloseBrace => return Ok(()),
                WordKind::OpenBrace => {
                    let mut nested = Procedure::new();
                    nested.parse(parser, depth + 1)?;
                    self.operations.push(Operation::Proc(Box::new(nested)));
                }
                WordKind::Fallback => {
                    tracing::trace!(pos = parser.word_pos(), "unrecognized word, using 0");
                    self.operations.push(Operation::Const(0.0));
                }
                WordKind::Operator(_) | WordKind::Number(_) => {
                    self.operations.push(Operation::from_word(word));
                }
            }
        }
    }

    /// Runs the operations in order against `engine`.
    ///
    /// `if` and `ifelse` take their branches from the operations immediately
    /// before them, not from the value stack.
    pub fn execute(&self, engine: &mut PSEngine) -> Result<()> {
        for (i, operation) in self.operations.iter().enumerate() {
            match operation.opcode() {
                Opcode::If => {
                    let Some(body) = self.preceding_proc(i, 1) else {
                        tracing::debug!(index = i, "if without procedure");
                        return Err(PsError::MissingProcedure(Opcode::If));
                    };
                    if engine.pop_int() != 0 {
                        body.execute(engine)?;
                    }
                }
                Opcode::IfElse => {
                    let (Some(if_true), Some(if_false)) =
                        (self.preceding_proc(i, 2), self.preceding_proc(i, 1))
                    else {
                        tracing::debug!(index = i, "ifelse without procedures");
                        return Err(PsError::MissingProcedure(Opcode::IfElse));
                    };
                    if engine.pop_int() != 0 {
                        if_true.execute(engine)?;
                    } else {
                        if_false.execute(engine)?;
                    }
                }
                _ => operation.execute(engine)?,
            }
        }
        Ok(())
    }

    /// The procedure `back` operations before index `i`, if that is a `Proc`.
    fn preceding_proc(&self, i: usize, back: usize) -> Option<&Procedure> {
        let index = i.checked_sub(back)?;
        self.operations[index].procedure()
    }
}

impl std::fmt::Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for operation in &self.operations {
            write!(f, " {operation}")?;
        }
        f.write_str(" }")
    }
}
