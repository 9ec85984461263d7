//! The calculator engine: a fixed-capacity float stack plus the parsed program.

use super::opcode::Opcode;
use super::operation::Operation;
use super::procedure::Procedure;
use crate::error::{PsError, Result};
use crate::parser::lexer::PSWordParser;

/// Capacity of the operand stack. Pushes beyond it are dropped.
pub const PS_STACK_SIZE: usize = 100;

/// Procedures nested this deep (counting the outermost as depth 0) are rejected.
pub const MAX_PARSE_DEPTH: usize = 128;

/// Truncates toward zero; values without an `i32` representation map to `i32::MIN`.
fn float_to_int(value: f32) -> i32 {
    // 2^31 is exactly representable, so these bounds are the i32 range.
    if (-2_147_483_648.0..2_147_483_648.0).contains(&value) {
        value as i32
    } else {
        i32::MIN
    }
}

/// Stack machine evaluating a PostScript calculator program.
///
/// Typical use: `parse` once, then for each evaluation `reset`, `push` the
/// inputs, `execute`, and `pop` the outputs. `execute` never clears the
/// stack on its own, so consecutive runs share stack contents.
#[derive(Debug, Clone)]
pub struct PSEngine {
    stack: [f32; PS_STACK_SIZE],
    stack_count: usize,
    main_proc: Procedure,
    parsed: bool,
}

impl Default for PSEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PSEngine {
    pub fn new() -> Self {
        Self {
            stack: [0.0; PS_STACK_SIZE],
            stack_count: 0,
            main_proc: Procedure::new(),
            parsed: false,
        }
    }

    /// Parses a program into the main procedure.
    ///
    /// The program must open with `{` and be closed by the matching `}`;
    /// anything after that brace is ignored. On error the engine should be
    /// discarded: the main procedure may hold a partial parse.
    pub fn parse(&mut self, input: &[u8]) -> Result<()> {
        if self.parsed {
            return Err(PsError::AlreadyParsed);
        }
        let mut parser = PSWordParser::new(input);
        if parser.next_word() != Some(b"{") {
            let pos = parser.word_pos();
            tracing::debug!(pos, "program does not open with a brace");
            return Err(PsError::MissingOpenBrace { pos });
        }
        self.main_proc.parse(&mut parser, 0)?;
        self.parsed = true;
        tracing::debug!(
            operations = self.main_proc.len(),
            "parsed calculator program"
        );
        Ok(())
    }

    /// Runs the main procedure against the current stack.
    pub fn execute(&mut self) -> Result<()> {
        // The procedure borrows `self` mutably while running, so detach it.
        let main_proc = std::mem::take(&mut self.main_proc);
        let result = main_proc.execute(self);
        self.main_proc = main_proc;
        result
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    pub fn main_procedure(&self) -> &Procedure {
        &self.main_proc
    }

    /// Appends one operator to the main procedure as if parsed from `word`.
    pub fn push_operator(&mut self, word: &[u8]) {
        self.main_proc.add_operator(word);
    }

    /// The most recently added operation of the main procedure.
    pub fn last_operation(&self) -> Option<&Operation> {
        self.main_proc.last_operation()
    }

    /// Empties the stack. The parsed program is kept.
    pub fn reset(&mut self) {
        self.stack_count = 0;
    }

    pub fn stack_size(&self) -> usize {
        self.stack_count
    }

    /// Live stack values, bottom first.
    pub fn stack(&self) -> &[f32] {
        &self.stack[..self.stack_count]
    }

    pub fn push(&mut self, value: f32) {
        if self.stack_count >= PS_STACK_SIZE {
            tracing::trace!(value, "operand stack full, dropping value");
            return;
        }
        self.stack[self.stack_count] = value;
        self.stack_count += 1;
    }

    /// Pops the top value, or returns 0 if the stack is empty.
    pub fn pop(&mut self) -> f32 {
        if self.stack_count == 0 {
            return 0.0;
        }
        self.stack_count -= 1;
        self.stack[self.stack_count]
    }

    /// Pops the top value truncated toward zero.
    ///
    /// NaN, infinities and magnitudes outside the `i32` range all become
    /// `i32::MIN`, the x86 conversion result Acrobat-compatible producers
    /// expect.
    pub fn pop_int(&mut self) -> i32 {
        float_to_int(self.pop())
    }

    pub(crate) fn push_bool(&mut self, value: bool) {
        self.push(if value { 1.0 } else { 0.0 });
    }

    /// Top `n` live stack slots, for the stack-manipulation operators.
    pub(crate) fn top_mut(&mut self, n: usize) -> &mut [f32] {
        let count = self.stack_count;
        &mut self.stack[count - n..count]
    }

    /// Applies a primitive operator to the stack.
    ///
    /// `if` and `ifelse` need the procedures preceding them in the program
    /// and are rejected here; `Proc` and `Const` are no-ops.
    pub fn do_operator(&mut self, op: Opcode) -> Result<()> {
        match op {
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Idiv
            | Opcode::Mod
            | Opcode::Neg
            | Opcode::Abs
            | Opcode::Ceiling
            | Opcode::Floor
            | Opcode::Round
            | Opcode::Truncate
            | Opcode::Sqrt
            | Opcode::Sin
            | Opcode::Cos
            | Opcode::Atan
            | Opcode::Exp
            | Opcode::Ln
            | Opcode::Log
            | Opcode::Cvi
            | Opcode::Cvr => self.do_arith(op),
            Opcode::Eq
            | Opcode::Ne
            | Opcode::Gt
            | Opcode::Ge
            | Opcode::Lt
            | Opcode::Le
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Not
            | Opcode::Bitshift
            | Opcode::True
            | Opcode::False => self.do_relational(op),
            Opcode::Pop
            | Opcode::Exch
            | Opcode::Dup
            | Opcode::Copy
            | Opcode::Index
            | Opcode::Roll => self.do_stack(op),
            Opcode::If | Opcode::IfElse => return Err(PsError::MissingProcedure(op)),
            Opcode::Proc | Opcode::Const => {}
        }
        Ok(())
    }
}
