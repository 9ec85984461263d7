//! Calculator operator implementations.
//!
//! Operators are grouped by category:
//! - `arith` - Arithmetic and math (add, sub, mul, div, idiv, mod, neg, abs, ceiling,
//!   floor, round, truncate, sqrt, sin, cos, atan, exp, ln, log, cvi, cvr)
//! - `relational` - Comparison, boolean and bitwise (eq, ne, gt, ge, lt, le, and, or,
//!   xor, not, bitshift, true, false)
//! - `stack` - Stack manipulation (pop, exch, dup, copy, index, roll)
//!
//! The conditionals `if` and `ifelse` live in `Procedure::execute`.

mod arith;
mod relational;
mod stack;

// Each module defines an impl block for PSEngine,
// so no pub use is needed - the methods are automatically available on the type.
