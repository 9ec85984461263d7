//! Relational, boolean and bitwise operators.
//!
//! Handles: eq, ne, gt, ge, lt, le, and, or, xor, not, bitshift, true, false
//!
//! Booleans are the numbers 1 and 0. `and`, `or` and `xor` work bitwise on
//! truncated integers, which agrees with logical operators on 0/1 inputs.

use crate::interp::engine::PSEngine;
use crate::interp::opcode::Opcode;

impl PSEngine {
    pub(crate) fn do_relational(&mut self, op: Opcode) {
        match op {
            Opcode::Eq | Opcode::Ne | Opcode::Gt | Opcode::Ge | Opcode::Lt | Opcode::Le => {
                let d2 = self.pop();
                let d1 = self.pop();
                let result = match op {
                    Opcode::Eq => d1 == d2,
                    Opcode::Ne => d1 != d2,
                    Opcode::Gt => d1 > d2,
                    Opcode::Ge => d1 >= d2,
                    Opcode::Lt => d1 < d2,
                    _ => d1 <= d2,
                };
                self.push_bool(result);
            }
            Opcode::And => {
                let i1 = self.pop_int();
                let i2 = self.pop_int();
                self.push((i1 & i2) as f32);
            }
            Opcode::Or => {
                let i1 = self.pop_int();
                let i2 = self.pop_int();
                self.push((i1 | i2) as f32);
            }
            Opcode::Xor => {
                let i1 = self.pop_int();
                let i2 = self.pop_int();
                self.push((i1 ^ i2) as f32);
            }
            // Zero becomes 1, anything else 0.
            Opcode::Not => {
                let i1 = self.pop_int();
                self.push_bool(i1 == 0);
            }
            Opcode::Bitshift => self.do_bitshift(),
            Opcode::True => self.push_bool(true),
            Opcode::False => self.push_bool(false),
            _ => unreachable!("{op} is not a relational operator"),
        }
    }

    /// Shifts `value` left by a positive `shift`, right by a negative one.
    ///
    /// Left shifts operate on the value's unsigned 32-bit pattern, so the
    /// result can exceed `i32::MAX`; shifting by 32 or more gives 0. Right
    /// shifts are arithmetic, so the sign is kept.
    ///
    /// PostScript operator: `bitshift`
    fn do_bitshift(&mut self) {
        let shift = self.pop_int();
        let value = self.pop_int();
        if shift > 0 {
            let bits = (value as u32).checked_shl(shift.unsigned_abs()).unwrap_or(0);
            self.push(bits as f32);
        } else {
            self.push((value >> shift.unsigned_abs().min(31)) as f32);
        }
    }
}
