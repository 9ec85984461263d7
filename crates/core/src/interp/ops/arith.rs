//! Arithmetic and math operators.
//!
//! Handles: add, sub, mul, div, idiv, mod, neg, abs, ceiling, floor, round,
//! truncate, sqrt, sin, cos, atan, exp, ln, log, cvi, cvr
//!
//! Angles are in degrees. Transcendental functions are evaluated in `f64`
//! and narrowed back to the stack's `f32`.

use crate::interp::engine::PSEngine;
use crate::interp::opcode::Opcode;

impl PSEngine {
    pub(crate) fn do_arith(&mut self, op: Opcode) {
        match op {
            Opcode::Add => {
                let d2 = self.pop();
                let d1 = self.pop();
                self.push(d1 + d2);
            }
            Opcode::Sub => {
                let d2 = self.pop();
                let d1 = self.pop();
                self.push(d1 - d2);
            }
            Opcode::Mul => {
                let d2 = self.pop();
                let d1 = self.pop();
                self.push(d1 * d2);
            }
            // No zero check: IEEE infinity/NaN is a valid result.
            Opcode::Div => {
                let d2 = self.pop();
                let d1 = self.pop();
                self.push(d1 / d2);
            }
            Opcode::Idiv => self.do_idiv(),
            Opcode::Mod => self.do_mod(),
            Opcode::Neg => {
                let d1 = self.pop();
                self.push(-d1);
            }
            Opcode::Abs => {
                let d1 = self.pop();
                self.push(d1.abs());
            }
            Opcode::Ceiling => {
                let d1 = self.pop();
                self.push(d1.ceil());
            }
            Opcode::Floor => {
                let d1 = self.pop();
                self.push(d1.floor());
            }
            // Halfway cases round away from zero.
            Opcode::Round => {
                let d1 = self.pop();
                self.push(d1.round());
            }
            Opcode::Truncate | Opcode::Cvi => self.do_truncate(),
            Opcode::Sqrt => {
                let d1 = self.pop();
                self.push(d1.sqrt());
            }
            Opcode::Sin => {
                let d1 = f64::from(self.pop());
                self.push(d1.to_radians().sin() as f32);
            }
            Opcode::Cos => {
                let d1 = f64::from(self.pop());
                self.push(d1.to_radians().cos() as f32);
            }
            Opcode::Atan => self.do_atan(),
            Opcode::Exp => {
                let exponent = f64::from(self.pop());
                let base = f64::from(self.pop());
                self.push(base.powf(exponent) as f32);
            }
            Opcode::Ln => {
                let d1 = f64::from(self.pop());
                self.push(d1.ln() as f32);
            }
            Opcode::Log => {
                let d1 = f64::from(self.pop());
                self.push(d1.log10() as f32);
            }
            Opcode::Cvr => {}
            _ => unreachable!("{op} is not an arithmetic operator"),
        }
    }

    /// Integer division of truncated operands. Division by zero, and the one
    /// overflowing quotient `i32::MIN / -1`, produce 0.
    ///
    /// PostScript operator: `idiv`
    fn do_idiv(&mut self) {
        let i2 = self.pop_int();
        let i1 = self.pop_int();
        self.push(i1.checked_div(i2).unwrap_or(0) as f32);
    }

    /// Remainder of truncated operands; sign follows the dividend. A zero
    /// divisor produces 0.
    ///
    /// PostScript operator: `mod`
    fn do_mod(&mut self) {
        let i2 = self.pop_int();
        let i1 = self.pop_int();
        self.push(i1.checked_rem(i2).unwrap_or(0) as f32);
    }

    /// Truncates through an `i32` conversion.
    ///
    /// NaN, infinities and magnitudes beyond the `i32` range all give
    /// `i32::MIN` instead of the float's integral part. Acrobat behaves the
    /// same way and producers rely on it.
    ///
    /// PostScript operators: `truncate`, `cvi`
    fn do_truncate(&mut self) {
        let i1 = self.pop_int();
        self.push(i1 as f32);
    }

    /// Angle in degrees of the vector (dx, dy), normalized into [0, 360).
    ///
    /// PostScript operator: `atan`
    fn do_atan(&mut self) {
        let dx = f64::from(self.pop());
        let dy = f64::from(self.pop());
        let mut angle = dy.atan2(dx).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        let mut angle = angle as f32;
        if angle >= 360.0 {
            angle -= 360.0;
        }
        self.push(angle);
    }
}
