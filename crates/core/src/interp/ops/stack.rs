//! Stack manipulation operators.
//!
//! Handles: pop, exch, dup, copy, index, roll
//!
//! `pop`, `exch` and `dup` go through the saturating push/pop, so on a short
//! stack they see zeros. `copy`, `index` and `roll` validate their counts
//! against the live stack and do nothing (beyond consuming their operands)
//! when a count is out of range.

use crate::interp::engine::{PS_STACK_SIZE, PSEngine};
use crate::interp::opcode::Opcode;

impl PSEngine {
    pub(crate) fn do_stack(&mut self, op: Opcode) {
        match op {
            Opcode::Pop => {
                self.pop();
            }
            Opcode::Exch => {
                let d2 = self.pop();
                let d1 = self.pop();
                self.push(d2);
                self.push(d1);
            }
            Opcode::Dup => {
                let d1 = self.pop();
                self.push(d1);
                self.push(d1);
            }
            Opcode::Copy => self.do_copy(),
            Opcode::Index => self.do_index(),
            Opcode::Roll => self.do_roll(),
            _ => unreachable!("{op} is not a stack operator"),
        }
    }

    /// Pushes copies of the top `n` entries, keeping their order.
    ///
    /// PostScript operator: `copy`
    fn do_copy(&mut self) {
        let n = self.pop_int();
        let Ok(n) = usize::try_from(n) else {
            return;
        };
        let count = self.stack_size();
        if n > count || count + n > PS_STACK_SIZE {
            return;
        }
        for i in count - n..count {
            let value = self.stack()[i];
            self.push(value);
        }
    }

    /// Pushes a copy of the entry `n` below the top (0 is the top itself).
    ///
    /// PostScript operator: `index`
    fn do_index(&mut self) {
        let n = self.pop_int();
        let Ok(n) = usize::try_from(n) else {
            return;
        };
        let count = self.stack_size();
        if n >= count {
            return;
        }
        let value = self.stack()[count - n - 1];
        self.push(value);
    }

    /// Rotates the top `n` entries by `j` positions. Positive `j` moves
    /// entries toward the top: `a b c 3 1 roll` gives `c a b`.
    ///
    /// PostScript operator: `roll`
    fn do_roll(&mut self) {
        let j = self.pop_int();
        let n = self.pop_int();
        let Ok(n) = usize::try_from(n) else {
            return;
        };
        if n == 0 || j == 0 || n > self.stack_size() {
            return;
        }
        // n <= PS_STACK_SIZE, so it fits in i64 and the remainder in usize.
        let shift = i64::from(j).rem_euclid(n as i64) as usize;
        self.top_mut(n).rotate_right(shift);
    }
}
